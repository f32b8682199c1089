//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe you can rewind", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (only the default path may be missing)
    #[arg(short, long, default_value = crate::settings::DEFAULT_PATH, global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply moves from a fresh game and print the result
    Replay {
        /// Cells in play order: indices (0-8, row-major) or labels like `center`
        #[arg(value_delimiter = ',')]
        cells: Vec<String>,

        /// Jump to this step after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
