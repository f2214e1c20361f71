//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which player
//! marked which square and are kept in the session history.

use super::search::SearchError;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The move was made by the player not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's the computer's turn, so human input is not accepted.
    #[display("Waiting for the computer to move")]
    ComputerToMove,

    /// A computer move was requested when the computer is not to move.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::GameOver | SearchError::NoMovesAvailable => MoveError::GameOver,
        }
    }
}
