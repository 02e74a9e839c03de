//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of game errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}
