//! Human-readable square and move notation.
//!
//! Squares are named by column letter (`a` for column 0) and 1-based row, so
//! `a1` is cell `(0, 0)` and `h8` is `(7, 7)`. A move renders as its side
//! followed by the path, joined by `-` for a quiet move and `:` for a capture:
//! `W: d3-e4`, `B: e6:c4:a2`.

use std::fmt;

use crate::errors::{GameError, GameResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Cell, PlayerColor};
use crate::moves::checkers_move::Move;

/// Convert a square name (for example: "d3") to a cell.
pub fn square_to_cell(square: &str) -> GameResult<Cell> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::InvalidNotation(format!(
            "invalid square: {square}"
        )));
    }

    let last_col = b'a' + BOARD_SIZE as u8 - 1;
    let last_row = b'1' + BOARD_SIZE as u8 - 1;
    let (col, row) = (bytes[0].to_ascii_lowercase(), bytes[1]);
    if !(b'a'..=last_col).contains(&col) {
        return Err(GameError::InvalidNotation(format!(
            "invalid column: {}",
            col as char
        )));
    }
    if !(b'1'..=last_row).contains(&row) {
        return Err(GameError::InvalidNotation(format!(
            "invalid row: {}",
            row as char
        )));
    }

    Ok(Cell::new(row - b'1', col - b'a'))
}

/// Square name of an on-board cell.
pub fn cell_to_square(cell: Cell) -> String {
    let col = char::from(b'a' + cell.col);
    let row = char::from(b'1' + cell.row);
    format!("{col}{row}")
}

/// Parse a path such as `"d3-e4"` or `"c3:e5:g7"` into cells.
///
/// Either separator is accepted; at least two squares are required.
pub fn parse_path(path: &str) -> GameResult<Vec<Cell>> {
    let cells = path
        .trim()
        .split(['-', ':'])
        .map(|square| square_to_cell(square.trim()))
        .collect::<GameResult<Vec<_>>>()?;
    if cells.len() < 2 {
        return Err(GameError::InvalidNotation(format!(
            "path needs a start and a landing square: {path}"
        )));
    }
    Ok(cells)
}

fn side_letter(player: PlayerColor) -> char {
    match player {
        PlayerColor::White => 'W',
        PlayerColor::Black => 'B',
    }
}

impl Move {
    /// Path of this move, for example `d3-e4` or `c3:e5:g7`.
    pub fn path_notation(&self) -> String {
        let separator = if self.is_capture() { ":" } else { "-" };
        self.cells
            .iter()
            .map(|&cell| cell_to_square(cell))
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn to_notation(&self) -> String {
        format!("{}: {}", side_letter(self.player), self.path_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_to_square, parse_path, square_to_cell};
    use crate::errors::GameError;
    use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};
    use crate::moves::checkers_move::Move;

    #[test]
    fn square_names_round_trip() {
        assert_eq!(square_to_cell("a1").expect("a1 parses"), Cell::new(0, 0));
        assert_eq!(square_to_cell("h8").expect("h8 parses"), Cell::new(7, 7));
        assert_eq!(square_to_cell("D3").expect("upper case parses"), Cell::new(2, 3));
        for cell in Cell::all() {
            assert_eq!(square_to_cell(&cell_to_square(cell)).expect("parses"), cell);
        }
    }

    #[test]
    fn rejects_bad_squares() {
        for bad in ["", "a", "i1", "a9", "a0", "a10"] {
            assert!(matches!(
                square_to_cell(bad),
                Err(GameError::InvalidNotation(_))
            ));
        }
    }

    #[test]
    fn renders_quiet_and_capture_moves() {
        let mut quiet = Move::new(PlayerColor::White, Cell::new(2, 3), false);
        quiet.push_landing(Cell::new(3, 4));
        assert_eq!(quiet.to_notation(), "W: d3-e4");

        let mut capture = Move::new(PlayerColor::Black, Cell::new(5, 4), false);
        capture.push_landing(Cell::new(3, 2));
        capture.push_capture(Cell::new(4, 3), PieceType::Normal);
        capture.push_landing(Cell::new(1, 0));
        capture.push_capture(Cell::new(2, 1), PieceType::Normal);
        assert_eq!(capture.to_string(), "B: e6:c4:a2");
    }

    #[test]
    fn parses_paths_with_either_separator() {
        assert_eq!(
            parse_path("d3-e4").expect("quiet path"),
            vec![Cell::new(2, 3), Cell::new(3, 4)]
        );
        assert_eq!(
            parse_path(" e6:c4:a2 ").expect("capture path"),
            vec![Cell::new(5, 4), Cell::new(3, 2), Cell::new(1, 0)]
        );
        assert!(parse_path("d3").is_err());
        assert!(parse_path("d3-z9").is_err());
    }
}
