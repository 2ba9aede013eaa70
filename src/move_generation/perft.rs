//! Perft: exhaustive move-path counting for generator validation and benches.
//!
//! Walks the game tree in place with scoped make/unmake, so it also exercises
//! the do/undo discipline the search relies on.

use crate::game_state::applied_move::AppliedMove;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::PlayerColor;
use crate::move_generation::legal_move_generator::generate_all_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Count move sequences of exactly `depth` plies starting with `player`.
/// Counters other than `nodes` describe the final ply of each sequence.
pub fn perft(board: &mut Board, player: PlayerColor, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generate_all_moves(board, player);
    let mut total = PerftCounts::default();

    if depth == 1 {
        total.nodes = moves.len() as u64;
        total.captures = moves.iter().filter(|m| m.is_capture()).count() as u64;
        total.promotions = moves.iter().filter(|m| m.is_promotion()).count() as u64;
        return total;
    }

    for mv in &moves {
        let mut applied = AppliedMove::new(board, mv);
        total.merge(perft(&mut applied, player.opposite(), depth - 1));
    }

    total
}
