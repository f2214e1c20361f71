//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so both the session and the search can share them.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_full};
pub use win::{check_winner, has_win, winning_line, WinLine, WIN_LINES};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// Wins are checked before fullness, so a board filled by a winning
/// move is a win rather than a draw.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn evaluate(board: &Board) -> Outcome {
    for player in [Player::X, Player::O] {
        if has_win(board, player) {
            return Outcome::Win(player);
        }
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
