//! Reversible two-word position key used by the transposition cache.
//!
//! The 32 playable cells are visited row-major. Cell `i` owns bits `2i`
//! (man) and `2i + 1` (king) of the wide word and bit `i` (white piece) of the
//! narrow word. The encoding is a bijection on boards whose empty cells carry
//! the default color, which [`Board`] maintains.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, PieceType, PlayerColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardHash {
    /// Two bits per playable cell: man, then king.
    pub pieces: u64,
    /// One bit per playable cell: set for white pieces.
    pub colors: u32,
}

impl BoardHash {
    /// Rebuild the board this key was computed from.
    pub fn to_board(self) -> Board {
        let mut board = Board::new_empty();
        for (i, cell) in Cell::playable().enumerate() {
            let piece_type = if self.pieces & (1u64 << (2 * i)) != 0 {
                PieceType::Normal
            } else if self.pieces & (1u64 << (2 * i + 1)) != 0 {
                PieceType::King
            } else {
                continue;
            };
            let color = if self.colors & (1u32 << i) != 0 {
                PlayerColor::White
            } else {
                PlayerColor::Black
            };
            board.set_piece(cell, color, piece_type);
        }
        board
    }
}

pub fn compute_board_hash(board: &Board) -> BoardHash {
    let mut key = BoardHash::default();
    for (i, cell) in Cell::playable().enumerate() {
        match board.piece_type(cell) {
            PieceType::Normal => key.pieces |= 1u64 << (2 * i),
            PieceType::King => key.pieces |= 1u64 << (2 * i + 1),
            PieceType::Empty => {}
        }
        if board.piece_color(cell) == PlayerColor::White {
            key.colors |= 1u32 << i;
        }
    }
    key
}
