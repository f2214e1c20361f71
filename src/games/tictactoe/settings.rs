//! Session settings: game mode and computer preferences.

use super::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Whether the computer takes part in the game.
///
/// Defaults to [`GameMode::TwoPlayer`], matching the start-up mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays against the minimax search.
    VsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "Two players",
            Self::VsComputer => "Vs computer",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoPlayer => Self::VsComputer,
            Self::VsComputer => Self::TwoPlayer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "two-player" | "2player" | "2p" | "pvp" => Ok(Self::TwoPlayer),
            "vs-computer" | "vsai" | "ai" | "computer" => Ok(Self::VsComputer),
            other => Err(format!(
                "unknown mode '{}', expected 'two-player' or 'vs-computer'",
                other
            )),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Player::from_char), chars.next()) {
            (Some(player), None) => Ok(player),
            _ => Err(format!("unknown mark '{}', expected 'x' or 'o'", s)),
        }
    }
}

/// Preferences that survive resets within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Mark played by the computer in [`GameMode::VsComputer`].
    pub computer: Player,
    /// Keep win tallies when the board is reset.
    ///
    /// Off by default: a reset zeroes both tallies.
    pub keep_scores_on_reset: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            computer: Player::O,
            keep_scores_on_reset: false,
        }
    }
}
