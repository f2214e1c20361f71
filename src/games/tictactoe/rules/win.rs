//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// One of the eight lines that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of this line, in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Checks whether all three squares hold `player`'s mark.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks whether `player` holds any winning line.
pub fn has_win(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| line.is_held_by(board, player))
}

/// Returns the first uniformly occupied line, if any.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.iter().copied().find(|line| {
        let [a, _, _] = line.positions();
        match board.get(a) {
            Square::Occupied(player) => line.is_held_by(board, player),
            Square::Empty => false,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.positions()[0]).player())
}
