//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a baseline opponent in
//! matches and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::PlayerColor;
use crate::move_generation::legal_move_generator::generate_all_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        player: PlayerColor,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let legal_moves = generate_all_moves(board, player);

        let picked = match params.seed {
            Some(seed) => legal_moves.choose(&mut StdRng::seed_from_u64(seed)),
            None => legal_moves.choose(&mut rand::rng()),
        };

        Ok(EngineOutput {
            best_move: picked.cloned(),
            score: None,
            nodes: legal_moves.len() as u64,
        })
    }
}
