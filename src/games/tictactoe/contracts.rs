//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are always checked; the session checks
//! postconditions in debug builds only.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::session::Session;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no further moves once the game has ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a won or drawn session.
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] on a taken square.
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        if session.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the move is made by the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] when the mover is out of turn.
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        if mov.player == *session.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition: the game is live, the mover is on turn and the
/// square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, game state first.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        PlayersTurn::check(mov, session)?;
        SquareIsEmpty::check(mov, session)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game must not be over
/// - Mover must be the player to move
/// - Square must be empty
///
/// Postconditions:
/// - Board matches the replayed history
/// - Players alternate, X first
/// - Outcome matches the board
pub struct MoveContract;

impl Contract<Session, Move> for MoveContract {
    fn pre(session: &Session, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &Session, after: &Session) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not extend history by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let session = Session::default();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&session, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let session = Session::default().apply_move(Position::Center).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&session, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_player() {
        let session = Session::default();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut session = Session::default();
        for index in [0, 3, 1, 4, 2] {
            session = session.apply_move(Position::from_index(index).unwrap()).unwrap();
        }
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(MoveContract::pre(&session, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Session::default();
        let after = before.apply_move(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Session::default();
        let mut after = before.apply_move(Position::Center).unwrap();
        after.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_history() {
        let before = Session::default();
        let mut after = before.apply_move(Position::Center).unwrap();
        after.history.clear();
        after.board = *before.board();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
