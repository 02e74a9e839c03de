//! Strictly Scoreboard - two-player tic-tac-toe with score tracking
//!
//! The game core is a headless state machine. Rendering is pluggable through
//! the [`GameDisplay`] observer trait, so the same controller drives the
//! terminal UI, the console front end and the tests.
//!
//! # Architecture
//!
//! - **Board**: the 9 cells, placement and win/tie detection
//! - **Player**: name, fixed marker and score
//! - **GameController**: turn sequencing, outcomes and score keeping
//! - **GameDisplay**: notifications emitted after every change
//!
//! # Example
//!
//! ```
//! use strictly_scoreboard::{EventLog, GameController};
//!
//! let mut game = GameController::new("Alice", "Bob", EventLog::new());
//! game.start_game("", "");
//! for index in [0, 3, 1, 4, 2] {
//!     assert!(game.play_turn(index)?);
//! }
//! assert!(!game.is_active());
//! assert_eq!(game.players()[0].score(), 1);
//! # Ok::<(), strictly_scoreboard::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, GameSettings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, EventDisplay, EventLog, EventSink, GameController, GameDisplay, GameError,
    GameErrorKind, GameEvent, GameSession, GameSnapshot, Marker, NullDisplay, Player, Position,
    Seat, TracingDisplay, Win, rules,
};
