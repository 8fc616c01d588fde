//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Player};

/// Strictly Games - tic-tac-toe rules and heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Tic-tac-toe rules engine and heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(long, global = true, default_value = "strictly_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a board as won, drawn or ongoing
    Evaluate {
        /// Board notation, e.g. "XX./.O./..O"
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Ask the heuristic AI for its move on a board
    Suggest {
        /// Board notation, e.g. "XX./.O./..O"
        board: Board,

        /// Mark the AI plays (defaults to whoever is to move)
        #[arg(long)]
        ai: Option<Player>,

        /// Seed for corner and fallback picks
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play against the AI on the terminal
    Play {
        /// Mark you play (random if omitted)
        #[arg(long)]
        mark: Option<Player>,

        /// Seed for the AI's random picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the AI play itself and tally the results
    Selfplay {
        /// Number of games (overrides the config file)
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for the AI's random picks
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
