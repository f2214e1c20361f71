//! Application state and logic.

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tictactoe_minimax::{GameConfig, Outcome, Position, Session};
use tracing::{debug, error, info, instrument, warn};

use super::input::{keypad_square, move_cursor};

/// Main application state.
///
/// Holds the current [`Session`] value and replaces it on every transition.
/// A computer move is scheduled as a deadline and applied by [`App::tick`].
pub struct App {
    session: Session,
    cursor: Position,
    computer_delay: Duration,
    pending_since: Option<Instant>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application from configuration.
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let mut app = Self {
            session: Session::new(*config.mode(), config.settings()),
            cursor: Position::Center,
            computer_delay: config.computer_delay(),
            pending_since: None,
            status_message: String::new(),
            should_quit: false,
        };
        app.settle(now);
        app
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the cursor square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true while a computer move is waiting for its deadline.
    pub fn computer_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Char('m') => self.toggle_mode(now),
            KeyCode::Enter | KeyCode::Char(' ') => self.try_move(self.cursor, now),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(position) = keypad_square(other) {
                    self.cursor = position;
                    self.try_move(position, now);
                }
            }
        }
    }

    /// Attempts a human move at `position`.
    ///
    /// Input is ignored while the computer's move is pending.
    pub fn try_move(&mut self, position: Position, now: Instant) {
        if self.pending_since.is_some() {
            debug!(position = %position, "Ignoring input while computer move is pending");
            return;
        }

        match self.session.apply_move(position) {
            Ok(next) => {
                self.session = next;
                self.settle(now);
            }
            Err(e) => {
                warn!(error = %e, position = %position, "Move rejected");
                self.status_message = format!("{}. {}", e, self.turn_prompt());
            }
        }
    }

    /// Applies the computer's move once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(since) = self.pending_since else {
            return;
        };
        if now.saturating_duration_since(since) < self.computer_delay {
            return;
        }

        self.pending_since = None;
        match self.session.play_computer_turn() {
            Ok((next, position)) => {
                debug!(position = %position, "Computer move applied");
                self.session = next;
                self.settle(now);
            }
            Err(e) => {
                error!(error = %e, "Computer move failed");
                self.status_message = format!("Computer move failed: {}", e);
            }
        }
    }

    /// Clears the board. A pending computer move is dropped.
    pub fn restart(&mut self, now: Instant) {
        debug!("Restarting game");
        self.session = self.session.reset();
        self.settle(now);
    }

    /// Switches between two-player and vs-computer, resetting the board.
    pub fn toggle_mode(&mut self, now: Instant) {
        let mode = self.session.mode().toggle();
        self.session = self.session.with_mode(mode);
        self.settle(now);
    }

    /// Schedules the computer if it is to move and refreshes the status line.
    fn settle(&mut self, now: Instant) {
        self.pending_since = self.session.is_computer_turn().then_some(now);
        self.status_message = self.turn_prompt();
    }

    fn turn_prompt(&self) -> String {
        match self.session.outcome() {
            Outcome::InProgress if self.pending_since.is_some() => {
                format!("Computer ({}) is thinking...", self.session.to_move())
            }
            Outcome::InProgress => format!("Player {}'s turn", self.session.to_move()),
            finished => format!("{} Press 'r' to play again.", finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_minimax::{GameMode, Player, Square};

    fn app(mode: GameMode, delay_ms: u64) -> (App, Instant) {
        let now = Instant::now();
        let config = GameConfig::default()
            .with_mode(mode)
            .with_computer_delay_ms(delay_ms);
        (App::new(&config, now), now)
    }

    #[test]
    fn test_digit_places_mark() {
        let (mut app, now) = app(GameMode::TwoPlayer, 0);
        app.handle_key(KeyCode::Char('5'), now);
        assert_eq!(
            app.session().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.status_message(), "Player O's turn");
    }

    #[test]
    fn test_arrows_then_enter_places_mark() {
        let (mut app, now) = app(GameMode::TwoPlayer, 0);
        app.handle_key(KeyCode::Up, now);
        app.handle_key(KeyCode::Left, now);
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(
            app.session().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_square_reports_error() {
        let (mut app, now) = app(GameMode::TwoPlayer, 0);
        app.handle_key(KeyCode::Char('5'), now);
        let before = app.session().clone();
        app.handle_key(KeyCode::Char('5'), now);
        assert_eq!(app.session(), &before);
        assert!(app.status_message().contains("occupied"));
    }

    #[test]
    fn test_computer_waits_for_deadline() {
        let (mut app, now) = app(GameMode::VsComputer, 500);
        app.handle_key(KeyCode::Char('1'), now);
        assert!(app.computer_pending());
        assert!(app.status_message().contains("thinking"));

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.session().history().len(), 1);

        // Input during the delay is ignored.
        app.handle_key(KeyCode::Char('9'), now + Duration::from_millis(200));
        assert_eq!(app.session().history().len(), 1);

        app.tick(now + Duration::from_millis(500));
        assert!(!app.computer_pending());
        assert_eq!(app.session().history().len(), 2);
        assert_eq!(app.session().to_move(), &Player::X);
    }

    #[test]
    fn test_restart_drops_pending_move() {
        let (mut app, now) = app(GameMode::VsComputer, 500);
        app.handle_key(KeyCode::Char('1'), now);
        app.handle_key(KeyCode::Char('r'), now);
        assert!(!app.computer_pending());
        app.tick(now + Duration::from_secs(1));
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_mode_toggle_resets_board() {
        let (mut app, now) = app(GameMode::TwoPlayer, 0);
        app.handle_key(KeyCode::Char('1'), now);
        app.handle_key(KeyCode::Char('m'), now);
        assert_eq!(app.session().mode(), &GameMode::VsComputer);
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_computer_playing_x_is_scheduled_at_start() {
        let now = Instant::now();
        let config = GameConfig::default()
            .with_mode(GameMode::VsComputer)
            .with_computer(Player::X)
            .with_computer_delay_ms(0);
        let mut app = App::new(&config, now);
        assert!(app.computer_pending());
        app.tick(now);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.session().to_move(), &Player::O);
    }

    #[test]
    fn test_quit() {
        let (mut app, now) = app(GameMode::TwoPlayer, 0);
        app.handle_key(KeyCode::Char('q'), now);
        assert!(app.should_quit());
    }
}
