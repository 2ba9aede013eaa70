//! Scoped make/unmake for the search scratchpad.
//!
//! [`AppliedMove`] applies a move when created and undoes it when dropped, so
//! every exit from a search frame (normal return, cutoff break, early return)
//! restores the board. It dereferences to the board for recursive descent.

use std::ops::{Deref, DerefMut};

use crate::game_state::board::Board;
use crate::moves::checkers_move::Move;

pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: &'a Move,
}

impl<'a> AppliedMove<'a> {
    pub fn new(board: &'a mut Board, mv: &'a Move) -> Self {
        board.do_move(mv);
        Self { board, mv }
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv);
    }
}
