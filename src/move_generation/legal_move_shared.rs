//! Geometry helpers shared by the man/king generators and the capture oracle.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, PlayerColor, UsedCell};

/// An opposing piece that has not been jumped yet in the current move.
///
/// Jumped pieces stay on the board until the move is applied, so they still
/// block landings and king slides.
#[inline]
pub fn is_capturable(board: &Board, cell: Cell, player: PlayerColor, used: &[UsedCell]) -> bool {
    !board.is_empty(cell)
        && board.piece_color(cell) != player
        && !used.iter().any(|u| u.cell() == cell)
}

/// A man's short jump in direction `(dr, dc)`: `(captured, landing)`.
#[inline]
pub fn man_jump(
    board: &Board,
    from: Cell,
    (dr, dc): (i8, i8),
    player: PlayerColor,
    used: &[UsedCell],
) -> Option<(Cell, Cell)> {
    let over = from.offset(dr, dc)?;
    let landing = over.offset(dr, dc)?;
    (is_capturable(board, over, player, used) && board.is_empty(landing)).then_some((over, landing))
}

/// First capturable piece a king meets sliding in `(dr, dc)` across empty
/// cells. `None` if the ray ends or hits an own or already-jumped piece.
pub fn king_capture_target(
    board: &Board,
    from: Cell,
    (dr, dc): (i8, i8),
    player: PlayerColor,
    used: &[UsedCell],
) -> Option<Cell> {
    let mut cursor = from.offset(dr, dc);
    while let Some(cell) = cursor {
        if is_capturable(board, cell, player, used) {
            return Some(cell);
        }
        if !board.is_empty(cell) {
            return None;
        }
        cursor = cell.offset(dr, dc);
    }
    None
}

/// Consecutive empty cells after `from` in direction `(dr, dc)`.
pub fn empty_run(board: &Board, from: Cell, (dr, dc): (i8, i8)) -> impl Iterator<Item = Cell> + '_ {
    std::iter::successors(from.offset(dr, dc), move |cell| cell.offset(dr, dc))
        .take_while(move |&cell| board.is_empty(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{PieceType, UsedCell};

    #[test]
    fn king_target_skips_empties_and_stops_at_own_piece() {
        let mut board = Board::new_empty();
        let king = Cell::new(0, 1);
        board.set_piece(king, PlayerColor::White, PieceType::King);
        board.set_piece(Cell::new(3, 4), PlayerColor::Black, PieceType::Normal);
        assert_eq!(
            king_capture_target(&board, king, (1, 1), PlayerColor::White, &[]),
            Some(Cell::new(3, 4))
        );

        board.set_piece(Cell::new(2, 3), PlayerColor::White, PieceType::Normal);
        assert_eq!(
            king_capture_target(&board, king, (1, 1), PlayerColor::White, &[]),
            None
        );
    }

    #[test]
    fn jumped_pieces_are_not_capturable_again() {
        let mut board = Board::new_empty();
        let enemy = Cell::new(3, 4);
        board.set_piece(enemy, PlayerColor::Black, PieceType::King);
        let used = [UsedCell::new(enemy, PieceType::King)];
        assert!(is_capturable(&board, enemy, PlayerColor::White, &[]));
        assert!(!is_capturable(&board, enemy, PlayerColor::White, &used));
        assert!(man_jump(&board, Cell::new(2, 3), (1, 1), PlayerColor::White, &used).is_none());
    }

    #[test]
    fn empty_run_stops_at_first_piece() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(4, 5), PlayerColor::Black, PieceType::Normal);
        let run: Vec<Cell> = empty_run(&board, Cell::new(1, 2), (1, 1)).collect();
        assert_eq!(run, vec![Cell::new(2, 3), Cell::new(3, 4)]);
    }
}
