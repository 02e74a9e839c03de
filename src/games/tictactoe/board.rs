//! The 3x3 board.

use super::error::{GameError, GameErrorKind};
use super::rules;
use super::types::{Cell, Marker, Win};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells are only ever filled by [`Board::place_mark`], which refuses
/// occupied cells, so a cell is never overwritten without a [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all 9 cells.
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.cells = [Cell::Empty; 9];
    }

    /// Places `marker` at `index` if the cell is empty.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is
    /// already occupied.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidIndex`] if `index` is not in 0-8.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, marker: Marker) -> Result<bool, GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| GameError::new(GameErrorKind::InvalidIndex(index)))?;

        if !cell.is_empty() {
            debug!(index, "Cell already occupied");
            return Ok(false);
        }

        *cell = Cell::Marked(marker);
        Ok(true)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Returns the first completed line, if any.
    pub fn find_winner(&self) -> Option<Win> {
        rules::find_winner(&self.cells)
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid, labelling empty cells 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!(" {} ", row * 3 + col + 1),
                    Cell::Marked(marker) => format!(" {} ", marker),
                })
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
