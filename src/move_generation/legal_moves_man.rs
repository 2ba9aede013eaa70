//! Move generation for men (uncrowned pieces).
//!
//! Quiet moves are one diagonal step forward. Captures jump an adjacent
//! opposing piece in any of the four diagonals and continue while further
//! jumps exist; a man crowned mid-chain continues with king captures.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::DIAGONALS;
use crate::move_generation::capture_oracle::can_capture;
use crate::move_generation::legal_move_generator::extend_move;
use crate::move_generation::legal_move_shared::man_jump;
use crate::moves::checkers_move::Move;

pub fn extend_man_moves(board: &Board, current: &Move, mandatory_capture: bool, out: &mut Vec<Move>) {
    let from = current.destination();
    let player = current.player;

    if !mandatory_capture {
        for dc in [-1, 1] {
            let Some(to) = from.offset(player.forward(), dc) else {
                continue;
            };
            if !board.is_empty(to) {
                continue;
            }
            let mut next = current.clone();
            next.push_landing(to);
            out.push(next);
        }
        return;
    }

    for dir in DIAGONALS {
        let Some((over, landing)) = man_jump(board, from, dir, player, &current.used) else {
            continue;
        };
        let mut next = current.clone();
        next.push_landing(landing);
        next.push_capture(over, board.piece_type(over));

        if can_capture(board, landing, player, next.is_king(), &next.used) {
            extend_move(board, next, true, out);
        } else {
            out.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};
    use crate::move_generation::legal_move_generator::generate_piece_moves;

    #[test]
    fn quiet_men_step_forward_only() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(3, 4), PlayerColor::Black, PieceType::Normal);
        let moves = generate_piece_moves(&board, PlayerColor::Black, Cell::new(3, 4), false);
        let destinations: Vec<Cell> = moves.iter().map(|m| m.destination()).collect();
        assert_eq!(destinations, vec![Cell::new(2, 3), Cell::new(2, 5)]);
        assert!(moves.iter().all(|m| !m.is_capture() && m.cells.len() == 2));
    }

    #[test]
    fn stepping_onto_last_row_crowns() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(6, 7), PlayerColor::White, PieceType::Normal);
        let moves = generate_piece_moves(&board, PlayerColor::White, Cell::new(6, 7), false);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Cell::new(7, 6));
        assert_eq!(moves[0].promotion_index, Some(1));
    }

    #[test]
    fn double_jump_is_taken_to_the_end() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(0, 1), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(1, 2), PlayerColor::Black, PieceType::Normal);
        board.set_piece(Cell::new(3, 4), PlayerColor::Black, PieceType::King);

        let moves = generate_piece_moves(&board, PlayerColor::White, Cell::new(0, 1), true);
        assert_eq!(moves.len(), 1);
        let mv = &moves[0];
        assert_eq!(mv.cells, vec![Cell::new(0, 1), Cell::new(2, 3), Cell::new(4, 5)]);
        assert_eq!(mv.used.len(), 2);
        assert_eq!(mv.used[1].piece_type, PieceType::King);
        assert_eq!(mv.promotion_index, None);
    }

    #[test]
    fn crowned_mid_chain_continues_as_king() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(5, 0), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(6, 1), PlayerColor::Black, PieceType::Normal);
        // Only reachable by a king: a long diagonal jump from (7, 2).
        board.set_piece(Cell::new(4, 5), PlayerColor::Black, PieceType::Normal);

        let moves = generate_piece_moves(&board, PlayerColor::White, Cell::new(5, 0), true);
        let finals: Vec<Cell> = moves.iter().map(|m| m.destination()).collect();
        assert_eq!(finals, vec![Cell::new(3, 6), Cell::new(2, 7)]);
        for mv in &moves {
            assert_eq!(mv.cells[1], Cell::new(7, 2));
            assert_eq!(mv.promotion_index, Some(1));
            assert_eq!(mv.used.len(), 2);
        }
    }
}
