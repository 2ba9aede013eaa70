//! Finished or in-progress game records for interchange.
//!
//! Records serialize to JSON (moves in their structural form, so they replay
//! exactly) and export to a PDN-style text with tag pairs and numbered
//! move pairs.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GameResult;
use crate::game::game_session::{GameSession, GameStatus};
use crate::moves::checkers_move::Move;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub created_at: DateTime<Utc>,
    pub white: String,
    pub black: String,
    pub status: GameStatus,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn from_session(
        session: &GameSession,
        white: impl Into<String>,
        black: impl Into<String>,
    ) -> Self {
        Self {
            created_at: Utc::now(),
            white: white.into(),
            black: black.into(),
            status: session.status(),
            moves: session.moves().to_vec(),
        }
    }

    /// Replay the recorded moves into a session.
    pub fn to_session(&self) -> GameResult<GameSession> {
        GameSession::replay(self.moves.iter().cloned())
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> GameResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read_json(path: impl AsRef<Path>) -> GameResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_pdn(&self) -> String {
        let result = result_token(self.status);
        let date = self.created_at.format("%Y.%m.%d").to_string();
        let tags = [
            ("Event", "Plum Checkers Game"),
            ("Date", date.as_str()),
            ("White", self.white.as_str()),
            ("Black", self.black.as_str()),
            ("Result", result),
        ];

        let mut out = String::new();
        for (key, value) in tags {
            out.push_str(&format!("[{key} \"{}\"]\n", escape_tag_value(value)));
        }
        out.push('\n');

        let mut movetext: Vec<String> = Vec::with_capacity(self.moves.len() + 1);
        for (ply, mv) in self.moves.iter().enumerate() {
            if ply % 2 == 0 {
                movetext.push(format!("{}. {}", ply / 2 + 1, mv.path_notation()));
            } else {
                movetext.push(mv.path_notation());
            }
        }
        movetext.push(result.to_owned());
        out.push_str(&movetext.join(" "));
        out.push('\n');
        out
    }
}

pub fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::WhiteWon => "1-0",
        GameStatus::BlackWon => "0-1",
        GameStatus::Draw => "1/2-1/2",
        GameStatus::Running => "*",
    }
}

fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
