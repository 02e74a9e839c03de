//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_scoreboard::Position;

/// Moves cursor based on arrow keys. The cursor stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to board positions.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
    }

    #[test]
    fn test_move_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, KeyCode::Right),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(digit_position(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_position(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_position(KeyCode::Char('0')), None);
        assert_eq!(digit_position(KeyCode::Char('x')), None);
        assert_eq!(digit_position(KeyCode::Enter), None);
    }
}
