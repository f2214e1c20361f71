//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and back the move postconditions.

mod alternating_turn;
mod monotonic_board;
mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so invariants compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a session must satisfy after a move.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Session, Square};

    #[test]
    fn test_fresh_session_satisfies_all() {
        assert!(TicTacToeInvariants::check_all(&Session::default()).is_ok());
    }

    #[test]
    fn test_corruption_reports_every_violation() {
        let mut session = Session::default().apply_move(Position::Center).unwrap();
        session.board.set(Position::TopLeft, Square::Occupied(Player::X));

        let violations = TicTacToeInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            MonotonicBoardInvariant::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            AlternatingTurnInvariant::description()
        )));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, OutcomeConsistentInvariant);
        assert!(TwoInvariants::check_all(&Session::default()).is_ok());
    }
}
