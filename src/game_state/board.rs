//! Board state: two parallel 8×8 matrices of piece type and piece color.
//!
//! The board carries no history. A game's current position is rebuilt by
//! replaying its committed moves with [`Board::do_move`], and the search uses
//! one board as an in-place scratchpad with strictly paired
//! [`Board::do_move`]/[`Board::undo_move`] calls.
//!
//! Empty cells always hold the default color (`Black`), so two boards with the
//! same visible pieces compare equal and hash equal.

use crate::game_state::checkers_rules::{BOARD_SIZE, STARTING_ROWS};
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};
use crate::game_state::position_hash::{compute_board_hash, BoardHash};
use crate::moves::checkers_move::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pub piece_types: [[PieceType; BOARD_SIZE]; BOARD_SIZE],
    pub piece_colors: [[PlayerColor; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening: each side's three back rows filled on playable cells.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for cell in Cell::playable() {
            let row = cell.row as usize;
            if row < STARTING_ROWS {
                board.set_piece(cell, PlayerColor::White, PieceType::Normal);
            } else if row >= BOARD_SIZE - STARTING_ROWS {
                board.set_piece(cell, PlayerColor::Black, PieceType::Normal);
            }
        }
        board
    }

    #[inline]
    pub fn piece_type(&self, cell: Cell) -> PieceType {
        self.piece_types[cell.row as usize][cell.col as usize]
    }

    #[inline]
    pub fn piece_color(&self, cell: Cell) -> PlayerColor {
        self.piece_colors[cell.row as usize][cell.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.piece_type(cell).is_empty()
    }

    /// Color and type of the piece on `cell`, if any.
    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<(PlayerColor, PieceType)> {
        let piece_type = self.piece_type(cell);
        (!piece_type.is_empty()).then(|| (self.piece_color(cell), piece_type))
    }

    /// Whether `cell` holds a piece owned by `player`.
    #[inline]
    pub fn is_owned_by(&self, cell: Cell, player: PlayerColor) -> bool {
        !self.is_empty(cell) && self.piece_color(cell) == player
    }

    /// Place a piece. Passing `PieceType::Empty` clears the cell.
    pub fn set_piece(&mut self, cell: Cell, color: PlayerColor, piece_type: PieceType) {
        debug_assert!(
            piece_type.is_empty() || cell.is_playable(),
            "pieces only live on playable cells, got {cell:?}"
        );
        let (row, col) = (cell.row as usize, cell.col as usize);
        self.piece_types[row][col] = piece_type;
        self.piece_colors[row][col] = if piece_type.is_empty() {
            PlayerColor::default()
        } else {
            color
        };
    }

    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.set_piece(cell, PlayerColor::default(), PieceType::Empty);
    }

    /// Count of pieces owned by `player`.
    pub fn piece_count(&self, player: PlayerColor) -> usize {
        Cell::playable()
            .filter(|&cell| self.is_owned_by(cell, player))
            .count()
    }

    /// Apply a move without any legality check.
    pub fn do_move(&mut self, mv: &Move) {
        for used in &mv.used {
            self.clear(used.cell());
        }
        self.clear(mv.start());
        self.set_piece(mv.destination(), mv.player, mv.resulting_piece());
    }

    /// Exact inverse of [`Board::do_move`] for the same move.
    pub fn undo_move(&mut self, mv: &Move) {
        self.clear(mv.destination());
        self.set_piece(mv.start(), mv.player, mv.starting_piece());
        let captured_color = mv.player.opposite();
        for used in &mv.used {
            self.set_piece(used.cell(), captured_color, used.piece_type);
        }
    }

    /// Two-word position key, see [`BoardHash`].
    #[inline]
    pub fn hash(&self) -> BoardHash {
        compute_board_hash(self)
    }
}
