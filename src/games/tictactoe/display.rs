//! Notifications from the game core to whatever renders it.
//!
//! The controller calls a [`GameDisplay`] after every state change. Displays
//! only observe: they receive borrowed snapshots and cannot veto or fail a
//! transition. Every method has a no-op default so a display implements only
//! what it renders.

use super::player::Player;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Observer of game state changes.
pub trait GameDisplay {
    /// A game was started or restarted.
    fn on_game_started(&mut self, _first: &Player, _second: &Player) {}

    /// The board changed.
    fn on_board_changed(&mut self, _cells: &[Cell; 9]) {}

    /// It is now `_current`'s turn.
    fn on_turn_changed(&mut self, _current: &Player) {}

    /// `_winner` completed `_line`.
    fn on_win(&mut self, _winner: &Player, _line: [usize; 3]) {}

    /// The board filled up with no winner.
    fn on_tie(&mut self) {}

    /// Scores or the tie count changed.
    fn on_scores_changed(&mut self, _first: u32, _second: u32, _ties: u32) {}
}

impl<D: GameDisplay + ?Sized> GameDisplay for &mut D {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        (**self).on_game_started(first, second);
    }

    fn on_board_changed(&mut self, cells: &[Cell; 9]) {
        (**self).on_board_changed(cells);
    }

    fn on_turn_changed(&mut self, current: &Player) {
        (**self).on_turn_changed(current);
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        (**self).on_win(winner, line);
    }

    fn on_tie(&mut self) {
        (**self).on_tie();
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        (**self).on_scores_changed(first, second, ties);
    }
}

impl<D: GameDisplay + ?Sized> GameDisplay for Box<D> {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        (**self).on_game_started(first, second);
    }

    fn on_board_changed(&mut self, cells: &[Cell; 9]) {
        (**self).on_board_changed(cells);
    }

    fn on_turn_changed(&mut self, current: &Player) {
        (**self).on_turn_changed(current);
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        (**self).on_win(winner, line);
    }

    fn on_tie(&mut self) {
        (**self).on_tie();
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        (**self).on_scores_changed(first, second, ties);
    }
}

/// A notification as an owned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A game was started or restarted.
    GameStarted {
        /// First player.
        first: Player,
        /// Second player.
        second: Player,
    },
    /// The board changed.
    BoardChanged {
        /// All 9 cells.
        cells: [Cell; 9],
    },
    /// The turn passed to a player.
    TurnChanged {
        /// Player to move.
        current: Player,
    },
    /// A player won.
    Win {
        /// The winner, score already updated.
        winner: Player,
        /// Indices of the winning line.
        line: [usize; 3],
    },
    /// The game ended in a tie.
    Tie,
    /// Scores changed.
    ScoresChanged {
        /// First player's score.
        first: u32,
        /// Second player's score.
        second: u32,
        /// Number of ties.
        ties: u32,
    },
}

/// Display that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {}

/// Consumer of notifications as owned [`GameEvent`] values.
///
/// Wrap a sink in [`EventDisplay`] to use it as a [`GameDisplay`].
pub trait EventSink {
    /// Receives one event.
    fn emit(&mut self, event: GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Display that converts each notification into a [`GameEvent`].
#[derive(Debug, Clone, Default)]
pub struct EventDisplay<S> {
    sink: S,
}

impl<S: EventSink> EventDisplay<S> {
    /// Wraps `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: EventSink> GameDisplay for EventDisplay<S> {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        self.sink.emit(GameEvent::GameStarted {
            first: first.clone(),
            second: second.clone(),
        });
    }

    fn on_board_changed(&mut self, cells: &[Cell; 9]) {
        self.sink.emit(GameEvent::BoardChanged { cells: *cells });
    }

    fn on_turn_changed(&mut self, current: &Player) {
        self.sink.emit(GameEvent::TurnChanged {
            current: current.clone(),
        });
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        self.sink.emit(GameEvent::Win {
            winner: winner.clone(),
            line,
        });
    }

    fn on_tie(&mut self) {
        self.sink.emit(GameEvent::Tie);
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        self.sink.emit(GameEvent::ScoresChanged {
            first,
            second,
            ties,
        });
    }
}

/// Display that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl GameDisplay for EventLog {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        EventDisplay::new(self).on_game_started(first, second);
    }

    fn on_board_changed(&mut self, cells: &[Cell; 9]) {
        EventDisplay::new(self).on_board_changed(cells);
    }

    fn on_turn_changed(&mut self, current: &Player) {
        EventDisplay::new(self).on_turn_changed(current);
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        EventDisplay::new(self).on_win(winner, line);
    }

    fn on_tie(&mut self) {
        EventDisplay::new(self).on_tie();
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        EventDisplay::new(self).on_scores_changed(first, second, ties);
    }
}

/// Display that logs notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDisplay;

impl GameDisplay for TracingDisplay {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        info!(first = %first.name(), second = %second.name(), "Game started");
    }

    fn on_turn_changed(&mut self, current: &Player) {
        info!(player = %current.name(), marker = %current.marker(), "Turn changed");
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        info!(player = %winner.name(), ?line, "Game won");
    }

    fn on_tie(&mut self) {
        info!("Game tied");
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        info!(first, second, ties, "Scores changed");
    }
}
