//! Static position evaluation.
//!
//! Search delegates the deterministic part of a leaf score to a
//! `BoardScorer`, so alternate heuristics can be swapped in without touching
//! the search itself. Tie-breaking noise is added by the search.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{KING_VALUE, MAN_BASE_VALUE};
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `player`.
    fn score(&self, board: &Board, player: PlayerColor) -> i32;
}

/// Material plus advancement: men are worth more the closer they are to
/// being crowned, kings are worth a flat amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceRowScorer;

impl PieceRowScorer {
    #[inline]
    pub const fn piece_value(piece_type: PieceType, color: PlayerColor, row: u8) -> i32 {
        match piece_type {
            PieceType::Empty => 0,
            PieceType::Normal => MAN_BASE_VALUE + color.rows_advanced(row) as i32,
            PieceType::King => KING_VALUE,
        }
    }
}

impl BoardScorer for PieceRowScorer {
    fn score(&self, board: &Board, player: PlayerColor) -> i32 {
        Cell::playable()
            .filter_map(|cell| {
                let (color, piece_type) = board.piece_at(cell)?;
                let value = Self::piece_value(piece_type, color, cell.row);
                Some(if color == player { value } else { -value })
            })
            .sum()
    }
}
