//! Application state for the terminal UI.
//!
//! [`App`] is the display the controller reports to. It keeps its own copy of
//! everything it draws, plus purely presentational state (cursor, name form).

use crossterm::event::KeyCode;
use strictly_scoreboard::{Cell, GameDisplay, Marker, Player, Position};
use tracing::debug;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The board.
    Playing,
    /// The player name form, drawn over the board.
    NameEntry(NameForm),
}

/// Two text fields for player names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    fields: [String; 2],
    focus: usize,
}

impl NameForm {
    /// Creates a form prefilled with `names`, focused on the first field.
    pub fn new(names: [String; 2]) -> Self {
        Self {
            fields: names,
            focus: 0,
        }
    }

    /// Field contents.
    pub fn fields(&self) -> &[String; 2] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }
}

/// What a key press in the name form asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing.
    Editing,
    /// Close the form without starting a game.
    Cancel,
    /// Start a game with these names (possibly blank).
    Submit([String; 2]),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    cells: [Cell; 9],
    names: [String; 2],
    scores: [u32; 2],
    ties: u32,
    turn: Option<Marker>,
    winning_line: Option<[usize; 3]>,
    status: String,
    cursor: Position,
    screen: Screen,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            names: Default::default(),
            scores: [0, 0],
            ties: 0,
            turn: None,
            winning_line: None,
            status: "Press n to start a new game.".to_string(),
            cursor: Position::Center,
            screen: Screen::Playing,
        }
    }

    /// Board cells as last reported.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Player names, first seat first.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Scores, first seat first.
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Number of ties.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Marker to move, or `None` when no game is running.
    pub fn turn(&self) -> Option<Marker> {
        self.turn
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Places the cursor on `position`.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Opens the name form prefilled with the current names.
    pub fn open_name_form(&mut self) {
        self.screen = Screen::NameEntry(NameForm::new(self.names.clone()));
    }

    /// Feeds a key to the name form.
    ///
    /// Returns [`FormAction::Editing`] when the form is not open.
    pub fn handle_form_key(&mut self, key: KeyCode) -> FormAction {
        let Screen::NameEntry(form) = &mut self.screen else {
            return FormAction::Editing;
        };

        let action = match key {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Enter => FormAction::Submit(form.fields.clone()),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.focus = 1 - form.focus;
                FormAction::Editing
            }
            KeyCode::Backspace => {
                form.fields[form.focus].pop();
                FormAction::Editing
            }
            KeyCode::Char(c) if !c.is_control() => {
                form.fields[form.focus].push(c);
                FormAction::Editing
            }
            _ => FormAction::Editing,
        };

        if action != FormAction::Editing {
            self.screen = Screen::Playing;
        }
        action
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay for App {
    fn on_game_started(&mut self, first: &Player, second: &Player) {
        debug!("Game started in UI");
        self.names = [first.name().clone(), second.name().clone()];
        self.winning_line = None;
        self.cursor = Position::Center;
    }

    fn on_board_changed(&mut self, cells: &[Cell; 9]) {
        self.cells = *cells;
    }

    fn on_turn_changed(&mut self, current: &Player) {
        self.turn = Some(current.marker());
        self.status = format!("{}'s turn ({})", current.name(), current.marker());
    }

    fn on_win(&mut self, winner: &Player, line: [usize; 3]) {
        self.turn = None;
        self.winning_line = Some(line);
        self.status = format!(
            "{} wins! Press r to play again or n for new players.",
            winner.name()
        );
    }

    fn on_tie(&mut self) {
        self.turn = None;
        self.status = "It's a tie! Press r to play again or n for new players.".to_string();
    }

    fn on_scores_changed(&mut self, first: u32, second: u32, ties: u32) {
        self.scores = [first, second];
        self.ties = ties;
    }
}
