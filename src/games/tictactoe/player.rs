//! Players and their scores.

use super::types::Marker;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A named player with a fixed marker and a running score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker placed by this player. Never changes.
    #[getter(skip)]
    marker: Marker,
    /// Games won since the last score reset.
    #[getter(skip)]
    #[new(default)]
    score: u32,
}

impl Player {
    /// Marker placed by this player.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Games won since the last score reset.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds one win.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
        debug!(score = self.score, "Score incremented");
    }

    /// Sets the score back to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Replaces the name.
    ///
    /// Blank names are accepted as-is; callers substitute a default first.
    #[instrument(skip(self, new_name), fields(old = %self.name))]
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
        debug!(new = %self.name, "Player renamed");
    }
}
