//! Turn sequencing, win/tie resolution and score keeping.
//!
//! [`GameController`] is the state machine. It has two states: inactive
//! (initial, and after every win or tie) and active (between a start or
//! restart and the next terminal move). A finished game leaves its board and
//! scores in place until the next start.

use super::board::Board;
use super::display::GameDisplay;
use super::error::{GameError, GameErrorKind};
use super::player::Player;
use super::types::{Marker, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Turn and outcome bookkeeping for the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// Seat whose turn it is.
    current: Seat,
    /// Whether moves are accepted.
    active: bool,
    /// Ties since the last score reset.
    tie_count: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            current: Seat::First,
            active: false,
            tie_count: 0,
        }
    }
}

/// Serializable view of the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Both players, first seat first.
    pub players: [Player; 2],
    /// Turn and outcome bookkeeping.
    pub session: GameSession,
}

/// Orchestrates a two-player game and reports every change to a display.
#[derive(Debug)]
pub struct GameController<D> {
    board: Board,
    players: [Player; 2],
    session: GameSession,
    display: D,
}

impl<D: GameDisplay> GameController<D> {
    /// Creates an inactive controller with two players named `first` and
    /// `second`.
    #[instrument(skip(display, first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>, display: D) -> Self {
        let players = [
            Player::new(first, Seat::First.marker()),
            Player::new(second, Seat::Second.marker()),
        ];
        info!(first = %players[0].name(), second = %players[1].name(), "Creating game controller");
        Self {
            board: Board::new(),
            players,
            session: GameSession::default(),
            display,
        }
    }

    /// Starts a new game, optionally renaming the players.
    ///
    /// A name is applied only when it is non-blank and differs from the
    /// current one. Any game in progress is discarded without being scored.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, first: &str, second: &str) {
        for (seat, name) in [(Seat::First, first), (Seat::Second, second)] {
            let player = &mut self.players[seat.index()];
            if !name.trim().is_empty() && name != player.name().as_str() {
                player.rename(name);
            }
        }
        self.begin();
    }

    /// Starts a new game with the current names.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        self.begin();
    }

    /// Zeroes both scores and the tie count.
    ///
    /// The board and whether a game is active are left alone.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.session.tie_count = 0;
        info!("Scores reset");
        self.notify_scores();
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Returns `Ok(false)` with no state change when no game is active or
    /// the cell is occupied. On success the board is checked for a winner
    /// first, then for a full board; a move that does both is a win.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidIndex`] if `index` is not in 0-8.
    /// Nothing changes in that case.
    #[instrument(skip(self), fields(current = ?self.session.current, active = self.session.active))]
    pub fn play_turn(&mut self, index: usize) -> Result<bool, GameError> {
        if !self.session.active {
            // Out-of-range indices are rejected in every state.
            if self.board.get(index).is_none() {
                return Err(GameError::new(GameErrorKind::InvalidIndex(index)));
            }
            debug!("No active game");
            return Ok(false);
        }

        let marker = self.current_player().marker();
        if !self.board.place_mark(index, marker)? {
            return Ok(false);
        }

        self.display.on_board_changed(&self.board.cells());

        if let Some(win) = self.board.find_winner() {
            self.session.active = false;
            let seat = self.seat_of(win.marker);
            let winner = &mut self.players[seat.index()];
            winner.increment_score();
            info!(winner = %winner.name(), line = ?win.line, "Game won");
            self.display.on_win(&self.players[seat.index()], win.line);
            self.notify_scores();
        } else if self.board.is_full() {
            self.session.active = false;
            self.session.tie_count = self.session.tie_count.saturating_add(1);
            info!(ties = self.session.tie_count, "Game tied");
            self.display.on_tie();
            self.notify_scores();
        } else {
            self.session.current = self.session.current.other();
            debug!(next = ?self.session.current, "Turn passed");
            self.notify_turn();
        }

        Ok(true)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the player whose turn it is (or was, once a game ends).
    pub fn current_player(&self) -> &Player {
        self.player(self.session.current)
    }

    /// Returns the session bookkeeping.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Whether moves are currently accepted.
    pub fn is_active(&self) -> bool {
        self.session.active
    }

    /// Ties since the last score reset.
    pub fn tie_count(&self) -> u32 {
        self.session.tie_count
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the display mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consumes the controller, returning the display.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Copies the whole game state into a serializable value.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            session: self.session,
        }
    }

    fn begin(&mut self) {
        self.board.reset();
        self.session.current = Seat::First;
        self.session.active = true;
        info!(
            first = %self.players[0].name(),
            second = %self.players[1].name(),
            "Game started"
        );
        self.display.on_game_started(&self.players[0], &self.players[1]);
        self.display.on_board_changed(&self.board.cells());
        self.notify_turn();
    }

    fn seat_of(&self, marker: Marker) -> Seat {
        if self.players[0].marker() == marker {
            Seat::First
        } else {
            Seat::Second
        }
    }

    fn notify_turn(&mut self) {
        let current = &self.players[self.session.current.index()];
        self.display.on_turn_changed(current);
    }

    fn notify_scores(&mut self) {
        self.display.on_scores_changed(
            self.players[0].score(),
            self.players[1].score(),
            self.session.tie_count,
        );
    }
}
