//! Tic-tac-toe with a perfect-play computer opponent.
//!
//! The library is the pure core of the game; the `tictactoe` binary is the
//! terminal front end that drives it.
//!
//! # Architecture
//!
//! - **Rules**: pure functions classifying a board (win, draw, empty cells)
//! - **Search**: exhaustive minimax choosing the computer's move
//! - **Session**: the game-state value (board, turn, mode, scores) with
//!   transitions that return a new value instead of mutating in place
//! - **Config**: optional TOML file with game preferences
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{GameMode, GameSettings, Outcome, Position, Session};
//!
//! # fn example() -> Result<(), tictactoe_minimax::MoveError> {
//! let session = Session::new(GameMode::VsComputer, GameSettings::default());
//! let session = session.apply_move(Position::Center)?;
//! assert!(session.is_computer_turn());
//!
//! let (session, reply) = session.play_computer_turn()?;
//! assert_eq!(session.outcome(), &Outcome::InProgress);
//! assert_ne!(reply, Position::Center);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    best_move, choose_move, empty_cells, evaluate, has_win, is_full, winning_line, Board,
    BoardParseError, GameMode, GameSettings, Mark, Move, MoveError, Outcome, Player, Position,
    Scoreboard, ScoredMove, SearchError, SearchRoles, Session, Square, WinLine, DRAW_SCORE,
    LOSS_SCORE, STARTING_PLAYER, WIN_LINES, WIN_SCORE,
};
