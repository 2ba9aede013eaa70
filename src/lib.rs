//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, engines, game sessions, and utility helpers) so the binary,
//! benches, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod applied_move;
    pub mod board;
    pub mod board_layout;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod position_hash;
}

pub mod moves {
    pub mod checkers_move;
    pub mod move_notation;
}

pub mod move_generation {
    pub mod capture_oracle;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negascout;
    pub mod transposition_table;
    pub mod xorshift;
}

pub mod engines {
    pub mod engine_negascout;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_session;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod game_record;
}
