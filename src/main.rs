use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plum_checkers::engines::engine_negascout::NegaScoutEngine;
use plum_checkers::engines::engine_trait::{Engine, GoParams};
use plum_checkers::errors::GameResult;
use plum_checkers::game::game_session::GameSession;
use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_types::PlayerColor;
use plum_checkers::move_generation::perft::perft;
use plum_checkers::moves::checkers_move::Move;
use plum_checkers::utils::engine_match_harness::{play_engine_match, MatchConfig};
use plum_checkers::utils::game_record::GameRecord;

#[derive(Parser, Debug)]
#[command(author, version, about = "Checkers engine with NegaScout search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for the side to move after replaying a JSON move list.
    Bestmove {
        #[arg(short, long)]
        depth: u8,
        /// Side to search for; defaults to the side to move.
        #[arg(short, long, value_enum)]
        player: Option<Side>,
        /// JSON array of moves, `-` for stdin. Omit to start from the opening.
        #[arg(short, long)]
        moves: Option<String>,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Play a full engine-vs-engine game.
    Selfplay {
        #[arg(long, default_value_t = 4)]
        white_depth: u8,
        #[arg(long, default_value_t = 4)]
        black_depth: u8,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the record as JSON instead of PDN text.
        #[arg(long)]
        json: bool,
    },
    /// Count move paths from the opening position.
    Perft {
        #[arg(short, long, default_value_t = 6)]
        depth: u8,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for PlayerColor {
    fn from(side: Side) -> Self {
        match side {
            Side::White => PlayerColor::White,
            Side::Black => PlayerColor::Black,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> GameResult<()> {
    match command {
        Command::Bestmove {
            depth,
            player,
            moves,
            seed,
        } => bestmove(depth, player.map(PlayerColor::from), moves.as_deref(), seed),
        Command::Selfplay {
            white_depth,
            black_depth,
            seed,
            json,
        } => selfplay(white_depth, black_depth, seed, json),
        Command::Perft { depth } => {
            run_perft(depth);
            Ok(())
        }
    }
}

fn read_moves(source: Option<&str>) -> GameResult<Vec<Move>> {
    let text = match source {
        None => return Ok(Vec::new()),
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)?,
    };
    Ok(serde_json::from_str(&text)?)
}

fn bestmove(
    depth: u8,
    player: Option<PlayerColor>,
    moves: Option<&str>,
    seed: Option<u64>,
) -> GameResult<()> {
    let session = GameSession::replay(read_moves(moves)?)?;
    let player = player.unwrap_or(session.next_player());

    let mut engine = NegaScoutEngine::new(depth);
    let params = GoParams {
        depth: Some(depth),
        seed,
    };
    let output = engine.choose_move(session.board(), player, &params)?;
    if let Some(mv) = &output.best_move {
        info!(mv = %mv, score = ?output.score, nodes = output.nodes, "best move");
    }
    println!("{}", serde_json::to_string(&output.best_move)?);
    Ok(())
}

fn selfplay(white_depth: u8, black_depth: u8, seed: Option<u64>, json: bool) -> GameResult<()> {
    let mut white = NegaScoutEngine::new(white_depth);
    let mut black = NegaScoutEngine::new(black_depth);
    let config = MatchConfig {
        white_params: GoParams {
            depth: Some(white_depth),
            seed: None,
        },
        black_params: GoParams {
            depth: Some(black_depth),
            seed: None,
        },
        seed,
    };
    let result = play_engine_match(&mut white, &mut black, config)?;

    let record = GameRecord::from_session(
        &result.session,
        format!("{} (depth {white_depth})", white.name()),
        format!("{} (depth {black_depth})", black.name()),
    );
    if json {
        println!("{}", record.to_json()?);
    } else {
        print!("{}", record.to_pdn());
    }
    Ok(())
}

fn run_perft(depth: u8) {
    let mut board = Board::new_game();
    for d in 1..=depth {
        let started = std::time::Instant::now();
        let counts = perft(&mut board, PlayerColor::White, d);
        println!(
            "perft({d}) nodes={} captures={} promotions={} ({} ms)",
            counts.nodes,
            counts.captures,
            counts.promotions,
            started.elapsed().as_millis()
        );
    }
}
