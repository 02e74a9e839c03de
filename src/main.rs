//! Tic-tac-toe - unified CLI
//!
//! Two-player tic-tac-toe with score tracking, played in a terminal UI or
//! line by line on the console.

#![warn(missing_docs)]

mod cli;
mod console;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::io;
use strictly_scoreboard::GameSettings;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Tui(play) => run_tui(play),
        Command::Console { play, json } => run_console(play, json),
    }
}

/// Run the terminal UI
fn run_tui(play: PlayArgs) -> Result<()> {
    let settings = GameSettings::load_or_default(&play.config)?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
    {
        debug!(error = %e, "Tracing subscriber already installed");
    }

    let (first, second) = settings.player_names(play.player1.as_deref(), play.player2.as_deref());
    tui::run_tui(&settings, first, second)
}

/// Run the console front end
fn run_console(play: PlayArgs, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = GameSettings::load_or_default(&play.config)?;
    let (first, second) = settings.player_names(play.player1.as_deref(), play.player2.as_deref());
    info!(%first, %second, json, "Starting console game");

    console::run(io::stdin().lock(), io::stdout().lock(), first, second, json)
}
