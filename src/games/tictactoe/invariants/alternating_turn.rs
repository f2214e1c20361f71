//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Session, STARTING_PLAYER};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is in
/// progress, the player to move must follow the last mover. Mark counts
/// on the board must agree with that order.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != STARTING_PLAYER
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        if x != o && x != o + 1 {
            return false;
        }

        match history.last() {
            None => *session.to_move() == STARTING_PLAYER,
            Some(last) if session.outcome().is_terminal() => *session.to_move() == last.player,
            Some(last) => *session.to_move() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
