//! Settings file for the front ends.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "tictactoe.toml";

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSettings {
    /// Name used for the first player when none (or a blank one) is given.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name used for the second player when none (or a blank one) is given.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player1_name() -> String {
    "Player 1".to_string()
}

fn default_player2_name() -> String {
    "Player 2".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            log_file: default_log_file(),
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            player1 = %settings.player1_name,
            player2 = %settings.player2_name,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Picks the names to start a game with.
    ///
    /// Missing or blank names fall back to the configured defaults.
    #[instrument(skip(self))]
    pub fn player_names(&self, first: Option<&str>, second: Option<&str>) -> (String, String) {
        (
            non_blank_or(first, &self.player1_name),
            non_blank_or(second, &self.player2_name),
        )
    }
}

fn non_blank_or(name: Option<&str>, default: &str) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
