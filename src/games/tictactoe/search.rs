//! Exhaustive minimax search for the computer's move.
//!
//! The search walks every legal continuation of the board and scores the
//! leaves from the maximizer's point of view:
//!
//! | leaf                    | score |
//! |-------------------------|-------|
//! | minimizer holds a line  | -10   |
//! | maximizer holds a line  | +10   |
//! | board full, no line     | 0     |
//!
//! Scores are not adjusted by depth, so a slow win and a fast win are worth
//! the same. Ties between equally scored moves go to the lowest cell index.
//! There is no pruning and no randomness: the same board always yields the
//! same move.

use super::rules::{empty_cells, has_win};
use super::{Board, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a leaf where the maximizing player has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a leaf where the minimizing player has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn leaf.
pub const DRAW_SCORE: i32 = 0;

/// Which mark the search maximizes for and which it minimizes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRoles {
    maximizer: Player,
}

impl SearchRoles {
    /// Roles with the computer playing `computer` as the maximizing side.
    pub fn new(computer: Player) -> Self {
        Self { maximizer: computer }
    }

    /// The maximizing (computer) mark.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// The minimizing (human) mark.
    pub fn minimizer(&self) -> Player {
        self.maximizer.opponent()
    }
}

impl Default for SearchRoles {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

/// A move paired with its minimax score.
///
/// `position` is `None` when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The chosen cell, if the board had any to choose from.
    pub position: Option<Position>,
    /// Minimax value of the board from the maximizer's point of view.
    pub score: i32,
}

impl ScoredMove {
    fn leaf(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Errors returned by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// A player already holds a winning line.
    #[display("Game is already over")]
    GameOver,
    /// Every square is occupied.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for SearchError {}

/// Returns the optimal move for `to_move` and its score.
///
/// The maximizer picks the strictly greatest score and the minimizer the
/// strictly least; on ties the first cell in index order is kept. The
/// base cases are checked at every node, the root included, so a board
/// that is already won or full scores immediately with no position.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_move(board: &Board, to_move: Player, roles: SearchRoles) -> ScoredMove {
    let mut nodes = 0u64;
    let result = minimax(board, to_move, roles, &mut nodes);
    debug!(
        nodes,
        position = ?result.position,
        score = result.score,
        "Search complete"
    );
    result
}

fn minimax(board: &Board, to_move: Player, roles: SearchRoles, nodes: &mut u64) -> ScoredMove {
    *nodes += 1;

    if has_win(board, roles.minimizer()) {
        return ScoredMove::leaf(LOSS_SCORE);
    }
    if has_win(board, roles.maximizer()) {
        return ScoredMove::leaf(WIN_SCORE);
    }

    let moves = empty_cells(board);
    if moves.is_empty() {
        return ScoredMove::leaf(DRAW_SCORE);
    }

    let maximizing = to_move == roles.maximizer();
    let mut best: Option<(Position, i32)> = None;

    for pos in moves {
        let child = board.with_mark(pos, to_move);
        let score = minimax(&child, to_move.opponent(), roles, nodes).score;

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => ScoredMove {
            position: Some(pos),
            score,
        },
        // Unreachable: `moves` was non-empty.
        None => ScoredMove::leaf(DRAW_SCORE),
    }
}

/// Picks the computer's next cell, refusing boards with nothing to play.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn choose_move(
    board: &Board,
    to_move: Player,
    roles: SearchRoles,
) -> Result<Position, SearchError> {
    if has_win(board, Player::X) || has_win(board, Player::O) {
        return Err(SearchError::GameOver);
    }

    best_move(board, to_move, roles)
        .position
        .ok_or(SearchError::NoMovesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move with O O _ on the top row.
        let result = best_move(&board("OO....X.X"), Player::O, SearchRoles::new(Player::O));
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; every other reply loses at once.
        let result = best_move(&board("XX..O...."), Player::O, SearchRoles::new(Player::O));
        assert_eq!(result.position, Some(Position::TopRight));
        assert!(result.score > LOSS_SCORE);
    }

    #[test]
    fn test_root_base_cases() {
        let roles = SearchRoles::new(Player::O);
        assert_eq!(
            best_move(&board("XXX.OO..."), Player::O, roles),
            ScoredMove::leaf(LOSS_SCORE)
        );
        assert_eq!(
            best_move(&board("OOO.XX.X."), Player::X, roles),
            ScoredMove::leaf(WIN_SCORE)
        );
        assert_eq!(
            best_move(&board("XOXOXOOXO"), Player::X, roles),
            ScoredMove::leaf(DRAW_SCORE)
        );
    }

    #[test]
    fn test_minimizer_picks_least_score() {
        // X is the human (minimizer) and can win at once on the top row.
        let result = best_move(&board("XX.OO...."), Player::X, SearchRoles::new(Player::O));
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_roles_are_configurable() {
        // Same position, but X is now the computer and maximizes.
        let result = best_move(&board("XX.OO...."), Player::X, SearchRoles::new(Player::X));
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        let result = best_move(&board("XOXXOOOX."), Player::X, SearchRoles::new(Player::O));
        assert_eq!(result.position, Some(Position::BottomRight));

        // Every opening draws under perfect play, so the first cell wins the tie.
        let empty = best_move(&Board::new(), Player::X, SearchRoles::new(Player::X));
        assert_eq!(empty.score, DRAW_SCORE);
        assert_eq!(empty.position, Some(Position::TopLeft));
    }

    #[test]
    fn test_choose_move_errors() {
        let roles = SearchRoles::default();
        assert_eq!(
            choose_move(&board("XXX.OO..."), Player::O, roles),
            Err(SearchError::GameOver)
        );
        assert_eq!(
            choose_move(&board("XOXOXOOXO"), Player::X, roles),
            Err(SearchError::NoMovesAvailable)
        );
    }
}
