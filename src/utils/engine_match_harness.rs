//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameSession`, so every engine move is validated and game end is decided
//! by the session rules.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::GameResult;
use crate::game::game_session::{GameSession, GameStatus};
use crate::game_state::checkers_types::PlayerColor;

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchConfig {
    pub white_params: GoParams,
    pub black_params: GoParams,
    /// Derives a distinct per-move seed for both engines when set.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub session: GameSession,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub player1_params: GoParams,
    pub player2_params: GoParams,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            player1_params: GoParams::default(),
            player2_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    /// Winner of each game, `None` for a draw.
    pub winners: Vec<Option<PlayerId>>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            Self::avg_ms(self.player1_total_time_ns, self.player1_moves),
            Self::avg_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Play one game from the standard opening.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: MatchConfig,
) -> GameResult<MatchResult> {
    play_engine_match_from_session(GameSession::new(), engine_white, engine_black, config)
}

/// Play on from `session` until it is no longer running.
pub fn play_engine_match_from_session<'a>(
    mut session: GameSession,
    engine_white: &'a mut dyn Engine,
    engine_black: &'a mut dyn Engine,
    config: MatchConfig,
) -> GameResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    while session.status() == GameStatus::Running {
        let mover = session.next_player();
        let (engine, mut params) = match mover {
            PlayerColor::White => (&mut *engine_white, config.white_params),
            PlayerColor::Black => (&mut *engine_black, config.black_params),
        };
        if let Some(seed) = config.seed {
            params.seed = Some(seed.wrapping_add(session.moves().len() as u64));
        }

        let started = Instant::now();
        session.play_engine_move(engine, &params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            PlayerColor::White => {
                white_move_count += 1;
                white_total_time_ns += elapsed_ns;
            }
            PlayerColor::Black => {
                black_move_count += 1;
                black_total_time_ns += elapsed_ns;
            }
        }
        if let Some(last) = session.moves().last() {
            debug!(engine = engine.name(), mv = %last, "match move");
        }
    }

    info!(
        white = engine_white.name(),
        black = engine_black.name(),
        status = ?session.status(),
        moves = session.moves().len(),
        "match finished"
    );
    Ok(MatchResult {
        session,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of games and tally the results per player.
///
/// Colors are drawn per game from a generator seeded with `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> GameResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i) << 16);
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_white {
            let match_config = MatchConfig {
                white_params: config.player1_params,
                black_params: config.player2_params,
                seed: Some(seed),
            };
            play_engine_match(player1.as_mut(), player2.as_mut(), match_config)?
        } else {
            let match_config = MatchConfig {
                white_params: config.player2_params,
                black_params: config.player1_params,
                seed: Some(seed),
            };
            play_engine_match(player2.as_mut(), player1.as_mut(), match_config)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        let winner = result.status().winner().map(|color| {
            if (color == PlayerColor::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        });
        match winner {
            Some(PlayerId::Player1) => stats.player1_wins += 1,
            Some(PlayerId::Player2) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.winners.push(winner);

        info!(
            game = i + 1,
            games = config.games,
            player1_is_white,
            ?winner,
            "series game finished"
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negascout::NegaScoutEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_rules::MAX_GAME_MOVES;

    #[test]
    fn random_match_runs_to_completion() {
        let mut white = RandomEngine::new();
        let mut black = RandomEngine::new();
        let config = MatchConfig {
            seed: Some(3),
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut white, &mut black, config).expect("match plays");

        assert!(result.status().is_over());
        let total = result.session.moves().len();
        assert!(total <= MAX_GAME_MOVES);
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            total
        );
        assert!(result.white_move_count >= result.black_move_count);
    }

    #[test]
    fn match_continues_from_a_given_session() {
        let mut start = GameSession::new();
        start
            .play_engine_move(&mut RandomEngine, &GoParams { depth: None, seed: Some(5) })
            .expect("opening move");
        let opening = start.moves().to_vec();

        let mut white = NegaScoutEngine::new(2).with_tt_capacity(1 << 12);
        let mut black = RandomEngine::new();
        let config = MatchConfig {
            seed: Some(21),
            ..MatchConfig::default()
        };
        let result = play_engine_match_from_session(start, &mut white, &mut black, config)
            .expect("match plays");

        assert!(result.status().is_over());
        assert_eq!(&result.session.moves()[..1], opening.as_slice());
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize + 1,
            result.session.moves().len()
        );
        assert!(result.black_move_count >= result.white_move_count);
    }

    #[test]
    fn seeded_random_matches_repeat() {
        let config = MatchConfig {
            seed: Some(11),
            ..MatchConfig::default()
        };
        let a = play_engine_match(&mut RandomEngine, &mut RandomEngine, config).expect("plays");
        let b = play_engine_match(&mut RandomEngine, &mut RandomEngine, config).expect("plays");
        assert_eq!(a.session.moves(), b.session.moves());
    }

    #[test]
    fn series_tallies_every_game() {
        let config = MatchSeriesConfig {
            games: 2,
            base_seed: 9,
            player1_params: GoParams {
                depth: Some(2),
                seed: None,
            },
            player2_params: GoParams::default(),
        };
        let stats = play_engine_match_series(
            || Box::new(NegaScoutEngine::new(2).with_tt_capacity(1 << 14)),
            || Box::new(RandomEngine::new()),
            config,
        )
        .expect("series plays");

        assert_eq!(stats.winners.len(), 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 2);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.report().starts_with("games=2 "));
    }
}
