//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (first player).
    X,
    /// Marker O (second player).
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Marked(Marker),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two player seats.
///
/// The first seat always holds [`Marker::X`] and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Seat {
    /// First player.
    First,
    /// Second player.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Marker assigned to this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::First => Marker::X,
            Seat::Second => Marker::O,
        }
    }

    /// Array index of this seat.
    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A completed line of three identical markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Marker occupying the line.
    pub marker: Marker,
    /// Board indices of the line, in evaluation order.
    pub line: [usize; 3],
}
