//! Outcome consistency invariant: the recorded outcome matches the board.

use super::super::rules::{evaluate, has_win, winning_line};
use super::super::{Outcome, Player, Session};
use super::Invariant;

/// Invariant: the session's outcome is what the rules say about its board.
///
/// At most one player holds a line, and the highlighted line is present
/// exactly when the game was won.
pub struct OutcomeConsistentInvariant;

impl Invariant<Session> for OutcomeConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();

        if has_win(board, Player::X) && has_win(board, Player::O) {
            return false;
        }

        if *session.outcome() != evaluate(board) {
            return false;
        }

        match session.outcome() {
            Outcome::Win(_) => *session.winning_line() == winning_line(board),
            Outcome::InProgress | Outcome::Draw => session.winning_line().is_none(),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_won_session_holds() {
        let mut session = Session::default();
        for index in [0, 3, 1, 4, 2] {
            session = session.apply_move(Position::from_index(index).unwrap()).unwrap();
        }
        assert!(OutcomeConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut session = Session::default().apply_move(Position::Center).unwrap();
        session.outcome = Outcome::Draw;
        assert!(!OutcomeConsistentInvariant::holds(&session));
    }
}
