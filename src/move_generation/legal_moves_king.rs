//! Move generation for kings (flying kings).
//!
//! Quiet moves slide any distance over empty cells. A capture passes over
//! empty cells to the first opposing piece and may land on any empty cell
//! beyond it; landings that allow another capture continue the chain instead
//! of ending the move there.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::DIAGONALS;
use crate::move_generation::capture_oracle::can_capture;
use crate::move_generation::legal_move_generator::extend_move;
use crate::move_generation::legal_move_shared::{empty_run, king_capture_target};
use crate::moves::checkers_move::Move;

pub fn extend_king_moves(board: &Board, current: &Move, mandatory_capture: bool, out: &mut Vec<Move>) {
    let from = current.destination();
    let player = current.player;

    if !mandatory_capture {
        for dir in DIAGONALS {
            for to in empty_run(board, from, dir) {
                let mut next = current.clone();
                next.push_landing(to);
                out.push(next);
            }
        }
        return;
    }

    for dir in DIAGONALS {
        let Some(target) = king_capture_target(board, from, dir, player, &current.used) else {
            continue;
        };
        let captured_type = board.piece_type(target);
        for landing in empty_run(board, target, dir) {
            let mut next = current.clone();
            next.push_landing(landing);
            next.push_capture(target, captured_type);

            if can_capture(board, landing, player, true, &next.used) {
                extend_move(board, next, true, out);
            } else {
                out.push(next);
            }
        }
    }
}
