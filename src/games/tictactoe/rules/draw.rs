//! Full-board detection logic for tic-tac-toe.

use super::super::types::Cell;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a tie.
#[instrument(skip(cells))]
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Marker;
    use super::super::win::find_winner;
    use super::*;

    fn is_tie(cells: &[Cell; 9]) -> bool {
        is_full(cells) && find_winner(cells).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[Cell::Empty; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut cells = [Cell::Marked(Marker::X); 9];
        cells[8] = Cell::Empty;
        assert!(!is_full(&cells));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&[Cell::Marked(Marker::O); 9]));
    }

    #[test]
    fn test_tie_detection() {
        use Marker::{O, X};
        // X O X / O X X / O X O
        let cells = [X, O, X, O, X, X, O, X, O].map(Cell::Marked);
        assert!(is_tie(&cells));
    }

    #[test]
    fn test_not_tie_if_winner() {
        use Marker::{O, X};
        // X X X / O O X / X O O
        let cells = [X, X, X, O, O, X, X, O, O].map(Cell::Marked);
        assert!(is_full(&cells));
        assert!(!is_tie(&cells));
    }
}
