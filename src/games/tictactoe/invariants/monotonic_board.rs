//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Session, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never touch an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_played_moves_hold() {
        let session = Session::default()
            .apply_move(Position::Center)
            .and_then(|s| s.apply_move(Position::TopLeft))
            .unwrap();
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = Session::default().apply_move(Position::Center).unwrap();
        session.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
