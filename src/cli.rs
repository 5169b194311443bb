//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - click-driven game against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write tracing output to (keeps logs off the TUI screen)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
