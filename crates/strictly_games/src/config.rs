//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Settings shared by the subcommands. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Seed for the AI's random picks; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Mark the human plays in `play`; random when absent.
    #[serde(default)]
    human_mark: Option<Player>,

    /// Number of games for `selfplay`.
    #[serde(default = "default_games")]
    games: u32,

    /// Whether `play` swaps marks when a new game starts.
    #[serde(default = "default_swap_on_restart")]
    swap_on_restart: bool,
}

fn default_games() -> u32 {
    100
}

fn default_swap_on_restart() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            human_mark: None,
            games: default_games(),
            swap_on_restart: default_swap_on_restart(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(games = config.games, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
