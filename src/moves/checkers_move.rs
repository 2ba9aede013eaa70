//! Structural move representation.
//!
//! A move is the ordered path a piece travels, the pieces it captures along
//! the way, and the path index at which it becomes a king. Moves are built
//! incrementally by the generator and treated as immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor, UsedCell};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerColor,
    /// Start cell followed by one landing cell per leg.
    pub cells: Vec<Cell>,
    /// Path index from which the piece is a king; `Some(0)` for a piece that
    /// was already a king when the move began.
    pub promotion_index: Option<usize>,
    /// Captured cells in capture order.
    pub used: Vec<UsedCell>,
}

impl Move {
    /// Start an in-progress move from `start`.
    pub fn new(player: PlayerColor, start: Cell, starts_as_king: bool) -> Self {
        Self {
            player,
            cells: vec![start],
            promotion_index: starts_as_king.then_some(0),
            used: Vec::new(),
        }
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn destination(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.used.is_empty()
    }

    /// Whether the moving piece is a king at the current end of the path.
    #[inline]
    pub fn is_king(&self) -> bool {
        self.promotion_index.is_some()
    }

    /// True when a man is crowned during this move.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.promotion_index, Some(index) if index > 0)
    }

    /// Piece type left on the destination cell.
    #[inline]
    pub fn resulting_piece(&self) -> PieceType {
        if self.is_king() {
            PieceType::King
        } else {
            PieceType::Normal
        }
    }

    /// Piece type the mover had on its start cell.
    #[inline]
    pub fn starting_piece(&self) -> PieceType {
        if self.promotion_index == Some(0) {
            PieceType::King
        } else {
            PieceType::Normal
        }
    }

    /// Append a landing cell, crowning the piece if it arrives on its promotion row.
    pub fn push_landing(&mut self, cell: Cell) {
        if self.promotion_index.is_none() && cell.row == self.player.promotion_row() {
            self.promotion_index = Some(self.cells.len());
        }
        self.cells.push(cell);
    }

    pub fn push_capture(&mut self, cell: Cell, piece_type: PieceType) {
        self.used.push(UsedCell::new(cell, piece_type));
    }

    /// Whether the piece on `cell` was already jumped earlier in this move.
    #[inline]
    pub fn has_captured(&self, cell: Cell) -> bool {
        self.used.iter().any(|u| u.cell() == cell)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.player == other.player
            && self.cells == other.cells
            && self.promotion_index == other.promotion_index
            && self.used.len() == other.used.len()
            && sorted_captures(&self.used) == sorted_captures(&other.used)
    }
}

/// Captures keyed by `(row, col, piece type)` in ascending order.
fn sorted_captures(used: &[UsedCell]) -> Vec<(u8, u8, u8)> {
    let mut keys: Vec<_> = used
        .iter()
        .map(|u| (u.row, u.col, u8::from(u.piece_type)))
        .collect();
    keys.sort_unstable();
    keys
}

impl Eq for Move {}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor, UsedCell};

    #[test]
    fn promotion_is_recorded_at_landing_index() {
        let mut mv = Move::new(PlayerColor::White, Cell::new(5, 2), false);
        mv.push_landing(Cell::new(7, 4));
        mv.push_capture(Cell::new(6, 3), PieceType::Normal);
        assert_eq!(mv.promotion_index, Some(1));
        assert!(mv.is_promotion());
        assert_eq!(mv.resulting_piece(), PieceType::King);
        assert_eq!(mv.starting_piece(), PieceType::Normal);
    }

    #[test]
    fn kings_keep_index_zero() {
        let mut mv = Move::new(PlayerColor::Black, Cell::new(3, 2), true);
        mv.push_landing(Cell::new(0, 5));
        assert_eq!(mv.promotion_index, Some(0));
        assert!(!mv.is_promotion());
        assert_eq!(mv.starting_piece(), PieceType::King);
    }

    #[test]
    fn equality_ignores_capture_order() {
        let mut a = Move::new(PlayerColor::White, Cell::new(0, 1), true);
        a.push_landing(Cell::new(4, 5));
        a.push_capture(Cell::new(1, 2), PieceType::Normal);
        a.push_capture(Cell::new(3, 4), PieceType::King);

        let mut b = a.clone();
        b.used.reverse();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.used[0].piece_type = PieceType::King;
        assert_ne!(a, c);
    }

    #[test]
    fn equality_is_symmetric_with_repeated_captures() {
        let mut a = Move::new(PlayerColor::White, Cell::new(0, 1), true);
        a.push_landing(Cell::new(4, 5));
        a.push_capture(Cell::new(1, 2), PieceType::Normal);
        a.push_capture(Cell::new(1, 2), PieceType::Normal);

        let mut b = a.clone();
        b.used[1] = UsedCell::new(Cell::new(3, 4), PieceType::Normal);

        assert_eq!(a == b, b == a);
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn round_trips_through_json() {
        let mut mv = Move::new(PlayerColor::White, Cell::new(2, 3), false);
        mv.push_landing(Cell::new(4, 5));
        mv.push_capture(Cell::new(3, 4), PieceType::Normal);

        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(
            json,
            r#"{"player":1,"cells":[{"row":2,"col":3},{"row":4,"col":5}],"promotion_index":null,"used":[{"row":3,"col":4,"piece_type":1}]}"#
        );
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
