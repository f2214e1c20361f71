//! Game session: the explicit state value the front end holds.
//!
//! A [`Session`] bundles the board, the side to move, the outcome, the mode
//! and the running scores. Transitions never mutate in place: each one
//! returns the next session, so a rejected move leaves the caller's value
//! untouched.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, WinLine};
use super::search::{choose_move, SearchRoles};
use super::settings::{GameMode, GameSettings};
use super::{Board, Outcome, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Mark that moves first in every game.
pub const STARTING_PLAYER: Player = Player::X;

/// Cumulative win tallies. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Adds one win to `player`'s tally.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// The board.
    pub(super) board: Board,
    /// Player to move. Frozen at the last mover once the game is over.
    pub(super) to_move: Player,
    /// Classification of the board.
    pub(super) outcome: Outcome,
    /// Line completed by the winner, for highlighting.
    pub(super) winning_line: Option<WinLine>,
    /// Moves played since the last reset.
    pub(super) history: Vec<Move>,
    /// Whether the computer plays.
    pub(super) mode: GameMode,
    /// Win tallies.
    pub(super) scores: Scoreboard,
    /// Preferences carried across resets.
    pub(super) settings: GameSettings,
}

impl Session {
    /// Creates a session with an empty board and zeroed scores.
    #[instrument]
    pub fn new(mode: GameMode, settings: GameSettings) -> Self {
        Self {
            board: Board::new(),
            to_move: STARTING_PLAYER,
            outcome: Outcome::InProgress,
            winning_line: None,
            history: Vec::new(),
            mode,
            scores: Scoreboard::default(),
            settings,
        }
    }

    /// Search roles for this session: the computer maximizes.
    pub fn roles(&self) -> SearchRoles {
        SearchRoles::new(self.settings.computer)
    }

    /// Returns true when the front end should trigger a computer move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.outcome == Outcome::InProgress
            && self.to_move == self.settings.computer
    }

    /// Empty squares, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            rules::empty_cells(&self.board)
        }
    }

    /// Applies a human move at `position`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    /// - [`MoveError::ComputerToMove`] while the computer's move is pending.
    #[instrument(skip(self), fields(player = %self.to_move, mode = %self.mode))]
    pub fn apply_move(&self, position: Position) -> Result<Session, MoveError> {
        if self.is_computer_turn() {
            debug!("Rejecting human move during computer turn");
            return Err(MoveError::ComputerToMove);
        }
        self.place(position)
    }

    /// Runs the search for the computer's mark and applies its choice.
    ///
    /// Returns the next session together with the chosen square.
    #[instrument(skip(self), fields(computer = %self.settings.computer))]
    pub fn play_computer_turn(&self) -> Result<(Session, Position), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(MoveError::NotComputerTurn);
        }

        let position = choose_move(&self.board, self.to_move, self.roles())?;
        info!(position = %position, "Computer chose move");
        let next = self.place(position)?;
        Ok((next, position))
    }

    /// Places the current mover's mark and re-evaluates the board.
    fn place(&self, position: Position) -> Result<Session, MoveError> {
        let action = Move::new(self.to_move, position);
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board.set(position, Square::Occupied(action.player));
        next.history.push(action);
        next.outcome = rules::evaluate(&next.board);

        match next.outcome {
            Outcome::Win(winner) => {
                next.scores.record_win(winner);
                next.winning_line = rules::winning_line(&next.board);
                info!(
                    winner = %winner,
                    x_wins = next.scores.wins(Player::X),
                    o_wins = next.scores.wins(Player::O),
                    "Game won"
                );
            }
            Outcome::Draw => info!("Game drawn"),
            Outcome::InProgress => next.to_move = action.player.opponent(),
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(action = %action, board = %next.board.to_compact(), "Move applied");
        Ok(next)
    }

    /// Clears the board and returns to the starting mark.
    ///
    /// Scores are zeroed unless [`GameSettings::keep_scores_on_reset`] is set.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Session {
        let scores = if self.settings.keep_scores_on_reset {
            self.scores
        } else {
            Scoreboard::default()
        };
        debug!(keep_scores = self.settings.keep_scores_on_reset, "Resetting session");

        Session {
            scores,
            ..Session::new(self.mode, self.settings)
        }
    }

    /// Switches mode. Changing mode always resets the board.
    #[instrument(skip(self))]
    pub fn with_mode(&self, mode: GameMode) -> Session {
        info!(from = %self.mode, to = %mode, "Changing mode");
        Session {
            mode,
            ..self.reset()
        }
    }

    /// Returns true if `position` lies on the winning line.
    pub fn is_winning_square(&self, position: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(position))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default(), GameSettings::default())
    }
}
