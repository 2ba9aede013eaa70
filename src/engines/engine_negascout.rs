//! NegaScout engine: fixed-depth search on a private copy of the board.
//!
//! Every request builds a fresh search (and so a fresh transposition cache),
//! which keeps requests independent of each other.

use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{DEFAULT_TT_CAPACITY, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use crate::game_state::checkers_types::PlayerColor;
use crate::search::negascout::{NegaScoutSearch, SearchConfig};

pub struct NegaScoutEngine {
    default_depth: u8,
    tt_capacity: usize,
}

impl NegaScoutEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            tt_capacity: DEFAULT_TT_CAPACITY,
        }
    }

    pub fn with_tt_capacity(mut self, tt_capacity: usize) -> Self {
        self.tt_capacity = tt_capacity;
        self
    }

    #[inline]
    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for NegaScoutEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

/// Reject depths outside the supported search range.
pub fn validate_depth(depth: u8) -> Result<u8, EngineError> {
    if (MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(EngineError::InvalidDepth {
            depth,
            min: MIN_SEARCH_DEPTH,
            max: MAX_SEARCH_DEPTH,
        })
    }
}

impl Engine for NegaScoutEngine {
    fn name(&self) -> &str {
        "PlumCheckers NegaScout"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        player: PlayerColor,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let depth = validate_depth(params.depth.unwrap_or(self.default_depth))?;

        let mut scratch = board.clone();
        let mut search = NegaScoutSearch::new(
            SearchConfig {
                max_depth: depth,
                tt_capacity: self.tt_capacity,
            },
            params.seed,
        );
        let result = search.search(&mut scratch, player);

        info!(
            engine = self.name(),
            ?player,
            depth,
            score = result.score,
            nodes = result.stats.nodes,
            found = result.best_move.is_some(),
            "engine move chosen"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            nodes: result.stats.nodes,
        })
    }
}
