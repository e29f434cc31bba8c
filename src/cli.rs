//! Command-line interface for gridtoe.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gridtoe - resizable tic-tac-toe with undo/redo
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Resizable tic-tac-toe with undo/redo history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Game settings shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Board size of the first game (3 up to the maximum)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Largest board size accepted on resize
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Maximum number of history entries kept
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GameArgs {
    /// Flag values that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            max_size: self.max_size,
            history_limit: self.history_limit,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Print the final game as JSON instead of a board
        #[arg(long)]
        json: bool,

        /// Moves as ROW,COL pairs, played in order starting with O
        #[arg(value_name = "ROW,COL")]
        moves: Vec<String>,
    },
}
