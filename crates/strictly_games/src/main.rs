//! Strictly Games - tic-tac-toe CLI
//!
//! Evaluates boards, suggests the heuristic AI's move, and plays games
//! against it on the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod selfplay;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use serde_json::json;
use strictly_tictactoe::{Board, Player, RandomSource, RngRandom, Session, decide, evaluate};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Evaluate { board, json } => run_evaluate(board, json),
        Command::Suggest {
            board,
            ai,
            seed,
            json,
        } => run_suggest(board, ai, seed.or(*config.seed()), json),
        Command::Play { mark, seed } => run_play(
            mark.or(*config.human_mark()),
            seed.or(*config.seed()),
            *config.swap_on_restart(),
        ),
        Command::Selfplay { games, seed, json } => {
            run_selfplay(games.unwrap_or(*config.games()), seed.or(*config.seed()), json)
        }
    }
}

/// Seeded generator when a seed is given, thread-local otherwise.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngRandom::seeded(seed)),
        None => Box::new(RngRandom::thread()),
    }
}

/// Print the outcome of a board
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: Board, json: bool) -> Result<()> {
    let outcome = evaluate(&board);
    if json {
        println!("{}", json!({ "board": board, "outcome": outcome }));
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

/// Print the AI's chosen move for a board
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, ai: Option<Player>, seed: Option<u64>, json: bool) -> Result<()> {
    let ai = ai.unwrap_or_else(|| board.next_to_move());
    let mut rng = random_source(seed);
    let decision = decide(&board, ai, ai.opponent(), rng.as_mut());
    info!(?decision, "Suggestion ready");

    match (decision, json) {
        (decision, true) => println!(
            "{}",
            json!({
                "board": board,
                "ai": ai,
                "index": decision.map(|d| d.position().to_index()),
                "position": decision.map(|d| *d.position()),
                "rule": decision.map(|d| *d.rule()),
            })
        ),
        (Some(decision), false) => println!(
            "{} ({}) by {}",
            decision.position().to_index(),
            decision.position(),
            decision.rule()
        ),
        (None, false) => println!("no legal move"),
    }
    Ok(())
}

/// Play against the AI on stdin/stdout
#[instrument]
fn run_play(mark: Option<Player>, seed: Option<u64>, swap_on_restart: bool) -> Result<()> {
    let mut rng = random_source(seed);
    let session = match mark {
        Some(mark) => Session::new(mark),
        None => Session::with_random_marks(rng.as_mut()),
    };
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let session = play::run(session, swap_on_restart, rng.as_mut(), stdin.lock(), &mut stdout)?;
    info!(outcome = %session.outcome(), "Leaving game");
    Ok(())
}

/// Run AI-vs-AI games and report the tally
#[instrument]
fn run_selfplay(games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = random_source(seed);
    let tally = selfplay::run(games, rng.as_mut());
    if json {
        println!("{}", serde_json::to_string(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
