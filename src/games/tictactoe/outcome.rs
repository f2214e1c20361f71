//! Outcome classification of a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Terminal or non-terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty square.
    #[default]
    InProgress,
    /// Player holds a winning line.
    Win(Player),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}
