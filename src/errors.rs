//! Error types for game sessions and engine requests.
//!
//! The rules core (move generation, do/undo, search) is infallible; these
//! errors cover the surfaces that accept external input.

use crate::game::game_session::GameStatus;
use crate::game_state::checkers_types::PlayerColor;

/// Errors raised when an engine request cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("search depth {depth} outside supported range {min}..={max}")]
    InvalidDepth { depth: u8, min: u8, max: u8 },
}

/// Errors raised by game sessions, layouts, and record I/O.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game is over: {0:?}")]
    GameOver(GameStatus),

    #[error("it is {expected:?}'s turn, got a move by {found:?}")]
    OutOfTurn {
        expected: PlayerColor,
        found: PlayerColor,
    },

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("move must contain a start cell and at least one landing cell")]
    EmptyMove,

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("invalid square notation: {0}")]
    InvalidNotation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("engine {0} returned no move in a running game")]
    NoEngineMove(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
