//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Position, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns the empty squares in ascending index order.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
