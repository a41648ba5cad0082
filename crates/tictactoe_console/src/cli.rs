//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark that opens every game (x or o); drawn at random when omitted
    #[arg(long)]
    pub first: Option<Mark>,

    /// Seed for the opening-mark draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Blank lines printed before each redraw of the board
    #[arg(long)]
    pub clear_lines: Option<usize>,
}
