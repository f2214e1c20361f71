//! Tic-tac-toe: board evaluation, minimax search and the session value.

pub mod action;
pub mod contracts;
pub mod invariants;
pub mod outcome;
pub mod position;
pub mod rules;
pub mod search;
pub mod session;
pub mod settings;
pub mod types;

pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{empty_cells, evaluate, has_win, is_full, winning_line, WinLine, WIN_LINES};
pub use search::{
    best_move, choose_move, ScoredMove, SearchError, SearchRoles, DRAW_SCORE, LOSS_SCORE,
    WIN_SCORE,
};
pub use session::{Scoreboard, Session, STARTING_PLAYER};
pub use settings::{GameMode, GameSettings};
pub use types::{Board, BoardParseError, Player, Square};

/// Alias for clarity where the player is referred to by the symbol it places.
pub type Mark = Player;
