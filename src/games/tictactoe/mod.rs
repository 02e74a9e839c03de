//! Two-player tic-tac-toe with score tracking.

mod board;
mod controller;
mod display;
mod error;
mod player;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use controller::{GameController, GameSession, GameSnapshot};
pub use display::{
    EventDisplay, EventLog, EventSink, GameDisplay, GameEvent, NullDisplay, TracingDisplay,
};
pub use error::{GameError, GameErrorKind};
pub use player::Player;
pub use position::Position;
pub use types::{Cell, Marker, Seat, Win};
