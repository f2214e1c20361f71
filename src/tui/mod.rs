//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_minimax::GameConfig;
use tracing::{error, info, instrument};

use app::App;

/// How long to wait for input before re-checking the computer's deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), computer = %config.computer()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, App::new(config, Instant::now()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait briefly for a key, then let pending computer moves fire.
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            app.handle_key(key.code, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}
