//! Canonical rule and engine constants.
//!
//! Board geometry, search-depth limits, the game-length ceiling, and the
//! evaluation weights shared by move generation, search, and game sessions.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Number of playable (dark) cells.
pub const PLAYABLE_CELLS: usize = BOARD_SIZE * BOARD_SIZE / 2;

/// Rows initially filled by each side at the start of a game.
pub const STARTING_ROWS: usize = 3;

/// Smallest search depth an engine request may ask for.
pub const MIN_SEARCH_DEPTH: u8 = 1;
/// Largest search depth an engine request may ask for.
pub const MAX_SEARCH_DEPTH: u8 = 10;

/// Total committed moves after which a still-running game is drawn.
pub const MAX_GAME_MOVES: usize = 200;

/// Base value of a man; rows advanced toward promotion are added on top.
pub const MAN_BASE_VALUE: i32 = 5;
/// Flat value of a king.
pub const KING_VALUE: i32 = 7 + BOARD_SIZE as i32;
/// Multiplier applied to the material/positional score before noise is added.
pub const EVAL_SCALE: i32 = 256;

/// Default transposition cache capacity, in entries.
pub const DEFAULT_TT_CAPACITY: usize = 20_000_000;
