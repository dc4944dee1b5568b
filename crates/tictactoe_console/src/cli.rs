//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board size, overriding the configuration file
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Apply a list of moves and print the result
    Replay {
        /// Moves as `row,col`, 1-indexed
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
