//! Game configuration loaded from an optional TOML file.

use crate::games::tictactoe::{GameMode, GameSettings, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Preferences for a game session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode the game starts in.
    #[serde(default)]
    mode: GameMode,

    /// Mark played by the computer.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Pause before the computer's move is shown, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Keep win tallies across resets and mode changes.
    #[serde(default)]
    keep_scores_on_reset: bool,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_computer() -> Player {
    Player::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer: default_computer(),
            computer_delay_ms: default_computer_delay_ms(),
            keep_scores_on_reset: false,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the starting mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the computer's mark.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Overrides the presentation delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Overrides whether scores survive a reset.
    pub fn with_keep_scores_on_reset(mut self, keep: bool) -> Self {
        self.keep_scores_on_reset = keep;
        self
    }

    /// Presentation delay before the computer's move.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Session settings derived from this configuration.
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            computer: self.computer,
            keep_scores_on_reset: self.keep_scores_on_reset,
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
