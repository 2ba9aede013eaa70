//! Text diagrams for boards.
//!
//! Eight lines, top line is row 7, leftmost character is column 0:
//! `.` empty, `w`/`W` white man/king, `b`/`B` black man/king. Whitespace inside
//! a line is ignored so diagrams can be spaced out for readability.

use std::fmt;

use crate::errors::{GameError, GameResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};

impl Board {
    pub fn from_diagram(diagram: &str) -> GameResult<Self> {
        let lines: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(GameError::InvalidLayout(format!(
                "expected {BOARD_SIZE} rows, found {}",
                lines.len()
            )));
        }

        let mut board = Board::new_empty();
        for (line_index, line) in lines.iter().enumerate() {
            let row = (BOARD_SIZE - 1 - line_index) as u8;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(GameError::InvalidLayout(format!(
                    "row {row} has {} cells",
                    symbols.len()
                )));
            }

            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = Cell::new(row, col as u8);
                let (color, piece_type) = match symbol {
                    '.' => continue,
                    'w' => (PlayerColor::White, PieceType::Normal),
                    'W' => (PlayerColor::White, PieceType::King),
                    'b' => (PlayerColor::Black, PieceType::Normal),
                    'B' => (PlayerColor::Black, PieceType::King),
                    other => {
                        return Err(GameError::InvalidLayout(format!(
                            "unknown symbol '{other}' at {cell:?}"
                        )))
                    }
                };
                if !cell.is_playable() {
                    return Err(GameError::InvalidLayout(format!(
                        "piece on non-playable cell {cell:?}"
                    )));
                }
                board.set_piece(cell, color, piece_type);
            }
        }

        Ok(board)
    }

    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));
        for row in (0..BOARD_SIZE as u8).rev() {
            for col in 0..BOARD_SIZE as u8 {
                if col > 0 {
                    out.push(' ');
                }
                out.push(symbol(self.piece_at(Cell::new(row, col))));
            }
            out.push('\n');
        }
        out
    }
}

fn symbol(piece: Option<(PlayerColor, PieceType)>) -> char {
    match piece {
        Some((PlayerColor::White, PieceType::Normal)) => 'w',
        Some((PlayerColor::White, PieceType::King)) => 'W',
        Some((PlayerColor::Black, PieceType::Normal)) => 'b',
        Some((PlayerColor::Black, PieceType::King)) => 'B',
        _ => '.',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_diagram())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::GameError;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};

    const OPENING: &str = "
        b . b . b . b .
        . b . b . b . b
        b . b . b . b .
        . . . . . . . .
        . . . . . . . .
        . w . w . w . w
        w . w . w . w .
        . w . w . w . w
    ";

    #[test]
    fn opening_diagram_matches_new_game() {
        let board = Board::from_diagram(OPENING).expect("diagram should parse");
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn diagram_round_trips() {
        let mut board = Board::new_game();
        board.set_piece(Cell::new(4, 3), PlayerColor::White, PieceType::King);
        let again = Board::from_diagram(&board.to_diagram()).expect("rendered diagram parses");
        assert_eq!(again, board);
    }

    #[test]
    fn rejects_pieces_on_light_squares() {
        let bad = OPENING.replacen("b . b", ". b b", 1);
        let err = Board::from_diagram(&bad).expect_err("light square must be rejected");
        assert!(matches!(err, GameError::InvalidLayout(_)));
    }

    #[test]
    fn rejects_short_diagrams() {
        assert!(Board::from_diagram("b . b .").is_err());
    }
}
