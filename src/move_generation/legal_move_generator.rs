//! Full legal move generation.
//!
//! Per-cell generation is a depth-first extension of an in-progress move,
//! dispatched to the man or king generator depending on whether the piece is
//! crowned at the current end of its path. Whole-side generation applies the
//! mandatory-capture rule first, so either every returned move captures or
//! none does.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};
use crate::move_generation::capture_oracle::{can_player_capture, can_player_move};
use crate::move_generation::legal_moves_king::extend_king_moves;
use crate::move_generation::legal_moves_man::extend_man_moves;
use crate::moves::checkers_move::Move;

/// Continue `current` from its last cell, pushing every completed move.
pub fn extend_move(board: &Board, current: Move, mandatory_capture: bool, out: &mut Vec<Move>) {
    if current.is_king() {
        extend_king_moves(board, &current, mandatory_capture, out);
    } else {
        extend_man_moves(board, &current, mandatory_capture, out);
    }
}

/// All maximal moves of the piece on `cell`, appended to `out`.
///
/// Nothing is generated for an off-board or empty cell, or for a piece that
/// `player` does not own.
pub fn generate_piece_moves_into(
    board: &Board,
    player: PlayerColor,
    cell: Cell,
    mandatory_capture: bool,
    out: &mut Vec<Move>,
) {
    if !cell.is_on_board() {
        return;
    }
    let Some((color, piece_type)) = board.piece_at(cell) else {
        return;
    };
    if color != player {
        return;
    }

    let start = Move::new(player, cell, piece_type == PieceType::King);
    extend_move(board, start, mandatory_capture, out);
}

pub fn generate_piece_moves(
    board: &Board,
    player: PlayerColor,
    cell: Cell,
    mandatory_capture: bool,
) -> Vec<Move> {
    let mut out = Vec::new();
    generate_piece_moves_into(board, player, cell, mandatory_capture, &mut out);
    out
}

/// Every legal move for `player`, scanning all cells row-major.
pub fn generate_all_moves(board: &Board, player: PlayerColor) -> Vec<Move> {
    let mandatory_capture = can_player_capture(board, player);
    let mut out = Vec::with_capacity(16);
    for cell in Cell::all() {
        generate_piece_moves_into(board, player, cell, mandatory_capture, &mut out);
    }
    out
}

/// Whether `mv` is structurally equal to a move the generator produces for
/// its start cell under the current mandatory-capture state.
pub fn is_legal_move(board: &Board, mv: &Move) -> bool {
    let Some(&start) = mv.cells.first() else {
        return false;
    };
    let mandatory_capture = can_player_capture(board, mv.player);
    generate_piece_moves(board, mv.player, start, mandatory_capture).contains(mv)
}

impl Board {
    #[inline]
    pub fn get_moves(&self, player: PlayerColor, cell: Cell, mandatory_capture: bool) -> Vec<Move> {
        generate_piece_moves(self, player, cell, mandatory_capture)
    }

    #[inline]
    pub fn can_player_capture(&self, player: PlayerColor) -> bool {
        can_player_capture(self, player)
    }

    #[inline]
    pub fn can_player_move(&self, player: PlayerColor) -> bool {
        can_player_move(self, player)
    }
}
