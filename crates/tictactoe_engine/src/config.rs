//! Engine configuration.

use crate::board::Board;
use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings fixed for the lifetime of an engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board dimension N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Mark that moves first in every game.
    #[serde(default = "default_starting_mark")]
    starting_mark: Mark,
}

fn default_board_size() -> usize {
    3
}

fn default_starting_mark() -> Mark {
    Mark::X
}

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(board_size: usize, starting_mark: Mark) -> Self {
        Self {
            board_size,
            starting_mark,
        }
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            board_size = config.board_size,
            starting_mark = %config.starting_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::cell_count(self.board_size).map_err(|_| {
            ConfigError::new(format!(
                "board_size must be between 1 and {}, got {}",
                Board::MAX_SIZE,
                self.board_size
            ))
        })?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_board_size(), default_starting_mark())
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
