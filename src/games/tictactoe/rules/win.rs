//! Win detection logic for tic-tac-toe.

use super::super::types::{Cell, Win};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first completed line.
///
/// Lines are checked in [`WINNING_LINES`] order; the first one whose three
/// cells hold the same marker wins.
#[instrument(skip(cells))]
pub fn find_winner(cells: &[Cell; 9]) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Cell::Marked(marker) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some(Win { marker, line })
            }
            _ => None,
        }
    })
}
