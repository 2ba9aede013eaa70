//! A running game: board, move list, side to move, and result.
//!
//! Sessions validate every submitted move against the generator before
//! committing it, then decide whether the game is over: a side left without
//! a legal move loses, and a game reaching the move ceiling is drawn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{GameError, GameResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::MAX_GAME_MOVES;
use crate::game_state::checkers_types::{Cell, PlayerColor};
use crate::move_generation::legal_move_generator::{generate_all_moves, is_legal_move};
use crate::moves::checkers_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    pub const fn winner(self) -> Option<PlayerColor> {
        match self {
            GameStatus::WhiteWon => Some(PlayerColor::White),
            GameStatus::BlackWon => Some(PlayerColor::Black),
            GameStatus::Running | GameStatus::Draw => None,
        }
    }

    const fn won_by(player: PlayerColor) -> Self {
        match player {
            PlayerColor::White => GameStatus::WhiteWon,
            PlayerColor::Black => GameStatus::BlackWon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    moves: Vec<Move>,
    next_player: PlayerColor,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard opening, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new_game(),
            moves: Vec::new(),
            next_player: PlayerColor::White,
            status: GameStatus::Running,
        }
    }

    /// Start from an arbitrary position with `next_player` to move.
    pub fn from_position(board: Board, next_player: PlayerColor) -> Self {
        let status = if board.can_player_move(next_player) {
            GameStatus::Running
        } else {
            GameStatus::won_by(next_player.opposite())
        };
        Self {
            board,
            moves: Vec::new(),
            next_player,
            status,
        }
    }

    /// Rebuild a game from its committed moves, validating each in turn.
    ///
    /// The side to move afterwards is the opponent of the last mover.
    pub fn replay<I>(moves: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut session = Self::new();
        for mv in moves {
            session.play(mv)?;
        }
        Ok(session)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn next_player(&self) -> PlayerColor {
        self.next_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        generate_all_moves(&self.board, self.next_player)
    }

    /// Whether `mv` could be played now.
    pub fn is_legal(&self, mv: &Move) -> bool {
        !self.status.is_over() && mv.player == self.next_player && is_legal_move(&self.board, mv)
    }

    /// The legal move whose cell path is exactly `path`.
    pub fn find_move_by_path(&self, path: &[Cell]) -> Option<Move> {
        self.legal_moves().into_iter().find(|mv| mv.cells == path)
    }

    /// Validate and commit `mv`, returning the status afterwards.
    pub fn play(&mut self, mv: Move) -> GameResult<GameStatus> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }
        if mv.cells.len() < 2 {
            return Err(GameError::EmptyMove);
        }
        if mv.player != self.next_player {
            return Err(GameError::OutOfTurn {
                expected: self.next_player,
                found: mv.player,
            });
        }
        if !is_legal_move(&self.board, &mv) {
            return Err(GameError::IllegalMove(mv.to_notation()));
        }

        self.board.do_move(&mv);
        let mover = mv.player;
        debug!(ply = self.moves.len() + 1, mv = %mv, "move committed");
        self.moves.push(mv);
        self.next_player = mover.opposite();

        self.status = if !self.board.can_player_move(self.next_player) {
            GameStatus::won_by(mover)
        } else if self.moves.len() >= MAX_GAME_MOVES {
            GameStatus::Draw
        } else {
            GameStatus::Running
        };
        if self.status.is_over() {
            debug!(status = ?self.status, moves = self.moves.len(), "game over");
        }

        Ok(self.status)
    }

    /// Ask `engine` for a move for the side to move and commit it.
    pub fn play_engine_move(
        &mut self,
        engine: &mut dyn Engine,
        params: &GoParams,
    ) -> GameResult<GameStatus> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }
        let output = engine.choose_move(&self.board, self.next_player, params)?;
        let mv = output
            .best_move
            .ok_or_else(|| GameError::NoEngineMove(engine.name().to_owned()))?;
        self.play(mv)
    }
}
