//! Engine abstraction layer used by game sessions and the match harness.
//!
//! Defines common request parameters and output payloads so different move
//! pickers can be selected at runtime behind a single trait interface.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::PlayerColor;
use crate::moves::checkers_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search depth; engines fall back to their own default when unset.
    pub depth: Option<u8>,
    /// Fixes the engine's random stream for reproducible choices.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `player`. The caller's board is never modified.
    fn choose_move(
        &mut self,
        board: &Board,
        player: PlayerColor,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError>;
}
