//! Command-line interface for the tictactoe binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_scoreboard::DEFAULT_SETTINGS_FILE;

/// Two-player tic-tac-toe with score tracking
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every front end
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Name of the first player (plays X, moves first)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long)]
    pub player2: Option<String>,

    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            player1: None,
            player2: None,
            config: PathBuf::from(DEFAULT_SETTINGS_FILE),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui(PlayArgs),

    /// Play line by line on stdin/stdout
    Console {
        /// Shared options
        #[command(flatten)]
        play: PlayArgs,

        /// Write every game notification to stdout as a JSON line
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui(PlayArgs::default())
    }
}
