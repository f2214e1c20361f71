//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::{GameMode, Player};

/// Tic-tac-toe with a computer opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Starting mode: two-player or vs-computer (overrides the config file)
        #[arg(long)]
        mode: Option<GameMode>,

        /// Mark played by the computer: x or o
        #[arg(long)]
        computer: Option<Player>,

        /// Pause before the computer's move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Keep win tallies when the board is reset
        #[arg(long)]
        keep_scores: bool,

        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Print the move the computer would play on a board
    BestMove {
        /// Nine squares in row-major order: X, O, and '.', '-' or '_' for empty
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long)]
        to_move: Option<Player>,

        /// Mark the search maximizes for
        #[arg(long, default_value = "o")]
        computer: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a board as won, drawn or in progress
    Evaluate {
        /// Nine squares in row-major order: X, O, and '.', '-' or '_' for empty
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
