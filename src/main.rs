//! Tic-tac-toe - unified CLI
//!
//! Interactive terminal game plus one-shot board analysis commands.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use std::path::Path;
use tictactoe_minimax::{
    Board, GameConfig, GameMode, Player, SearchRoles, best_move, evaluate, winning_line,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The game logs to a file once its config is known
    if !matches!(cli.command, Command::Play { .. }) {
        initialize_stderr_tracing();
    }

    match cli.command {
        Command::Play {
            mode,
            computer,
            delay_ms,
            keep_scores,
            config,
        } => run_play(&config, mode, computer, delay_ms, keep_scores),
        Command::BestMove {
            board,
            to_move,
            computer,
            json,
        } => run_best_move(&board, to_move, computer, json),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
    }
}

/// Run the interactive terminal game
fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    computer: Option<Player>,
    delay_ms: Option<u64>,
    keep_scores: bool,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(computer) = computer {
        config = config.with_computer(computer);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if keep_scores {
        config = config.with_keep_scores_on_reset(true);
    }

    // Log to a file so output does not corrupt the screen
    initialize_file_tracing(config.log_file())?;
    info!(config = ?config, "Configuration resolved");

    tui::run_tui(&config)
}

/// Print the move the search picks for a board
#[instrument(skip_all, fields(board = %board))]
fn run_best_move(board: &str, to_move: Option<Player>, computer: Player, json: bool) -> Result<()> {
    let board = Board::parse(board).context("Invalid board")?;
    let to_move = to_move.unwrap_or_else(|| board.next_player());
    debug!(to_move = %to_move, computer = %computer, "Searching");

    let scored = best_move(&board, to_move, SearchRoles::new(computer));

    if json {
        let output = json!({
            "board": board.to_compact(),
            "to_move": to_move,
            "computer": computer,
            "position": scored.position,
            "index": scored.position.map(|p| p.to_index()),
            "score": scored.score,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    match scored.position {
        Some(position) => println!(
            "{} plays {} (square {}), score {}",
            to_move,
            position.label(),
            position.to_index() + 1,
            scored.score
        ),
        None => println!("No move: game is over ({})", evaluate(&board)),
    }
    Ok(())
}

/// Print the outcome of a board
#[instrument(skip_all, fields(board = %board))]
fn run_evaluate(board: &str, json: bool) -> Result<()> {
    let board = Board::parse(board).context("Invalid board")?;
    let outcome = evaluate(&board);
    let line = winning_line(&board);

    if json {
        let output = json!({
            "board": board.to_compact(),
            "outcome": outcome,
            "winner": outcome.winner(),
            "winning_line": line,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    println!("{}", outcome);
    if let Some(line) = line {
        let labels: Vec<&str> = line.positions().iter().map(|p| p.label()).collect();
        println!("Winning line: {}", labels.join(", "));
    }
    Ok(())
}

fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
