//! Core value types shared by the board, move generation, and search.
//!
//! Piece kinds and colors are stored separately (two parallel matrices on the
//! board), so both enums stay tiny `Copy` values. Their wire representation is
//! a small integer with a fixed mapping:
//!
//! | enum          | value | integer |
//! |---------------|-------|---------|
//! | `PieceType`   | Empty | 0       |
//! | `PieceType`   | Normal| 1       |
//! | `PieceType`   | King  | 2       |
//! | `PlayerColor` | Black | 0       |
//! | `PlayerColor` | White | 1       |

use serde::{Deserialize, Serialize};

use crate::game_state::checkers_rules::BOARD_SIZE;

/// Diagonal step directions as `(row_delta, col_delta)`, in generation order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Kind of piece occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PieceType {
    #[default]
    Empty,
    Normal,
    King,
}

impl PieceType {
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            PieceType::Empty => 0,
            PieceType::Normal => 1,
            PieceType::King => 2,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceType::Empty)
    }
}

impl From<PieceType> for u8 {
    fn from(value: PieceType) -> Self {
        value.index()
    }
}

impl TryFrom<u8> for PieceType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PieceType::Empty),
            1 => Ok(PieceType::Normal),
            2 => Ok(PieceType::King),
            other => Err(format!("invalid piece type {other}")),
        }
    }
}

/// Player color. Black is the default color of an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PlayerColor {
    #[default]
    Black,
    White,
}

impl PlayerColor {
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            PlayerColor::Black => 0,
            PlayerColor::White => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PlayerColor::Black => -1,
            PlayerColor::White => 1,
        }
    }

    /// Row on which this side's men are promoted.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            PlayerColor::Black => 0,
            PlayerColor::White => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Rows a man on `row` has advanced from this side's back rank.
    #[inline]
    pub const fn rows_advanced(self, row: u8) -> u8 {
        match self {
            PlayerColor::Black => (BOARD_SIZE - 1) as u8 - row,
            PlayerColor::White => row,
        }
    }
}

impl From<PlayerColor> for u8 {
    fn from(value: PlayerColor) -> Self {
        value.index()
    }
}

impl TryFrom<u8> for PlayerColor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlayerColor::Black),
            1 => Ok(PlayerColor::White),
            other => Err(format!("invalid player color {other}")),
        }
    }
}

/// A board coordinate. Row 0 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Dark squares: the only cells pieces ever occupy.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Neighbor at `(dr, dc)`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let cell = Cell::new(row, col);
        cell.is_on_board().then_some(cell)
    }

    /// All playable cells, row-major.
    pub fn playable() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE as u8).flat_map(|row| {
            ((row + 1) % 2..BOARD_SIZE as u8)
                .step_by(2)
                .map(move |col| Cell::new(row, col))
        })
    }

    /// Every cell on the board, row-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Cell::new(row, col)))
    }
}

/// A captured cell together with the piece type it held before capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsedCell {
    pub row: u8,
    pub col: u8,
    pub piece_type: PieceType,
}

impl UsedCell {
    #[inline]
    pub const fn new(cell: Cell, piece_type: PieceType) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            piece_type,
        }
    }

    #[inline]
    pub const fn cell(self) -> Cell {
        Cell::new(self.row, self.col)
    }
}
