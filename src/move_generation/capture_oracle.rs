//! Existence-only capture queries.
//!
//! These mirror the capture branches of the generators but short-circuit on
//! the first available jump and never build moves. The search uses them to
//! decide whether capture is mandatory; game sessions use them to detect a
//! side with no moves left.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor, UsedCell, DIAGONALS};
use crate::move_generation::legal_move_generator::generate_piece_moves;
use crate::move_generation::legal_move_shared::{king_capture_target, man_jump};

/// Whether a piece of `player` standing on `cell` could jump something now,
/// ignoring the pieces listed in `used`.
pub fn can_capture(
    board: &Board,
    cell: Cell,
    player: PlayerColor,
    is_king: bool,
    used: &[UsedCell],
) -> bool {
    if is_king {
        DIAGONALS.iter().any(|&dir| {
            king_capture_target(board, cell, dir, player, used)
                .and_then(|target| target.offset(dir.0, dir.1))
                .is_some_and(|landing| board.is_empty(landing))
        })
    } else {
        DIAGONALS
            .iter()
            .any(|&dir| man_jump(board, cell, dir, player, used).is_some())
    }
}

/// Whether any piece of `player` has a capture available.
pub fn can_player_capture(board: &Board, player: PlayerColor) -> bool {
    Cell::playable().any(|cell| match board.piece_at(cell) {
        Some((color, piece_type)) if color == player => {
            can_capture(board, cell, player, piece_type == PieceType::King, &[])
        }
        _ => false,
    })
}

/// Whether `player` has at least one legal move.
pub fn can_player_move(board: &Board, player: PlayerColor) -> bool {
    can_player_capture(board, player)
        || Cell::playable().any(|cell| !generate_piece_moves(board, player, cell, false).is_empty())
}
