//! Tests for tic-tac-toe position enum.

use strictly_scoreboard::{Board, Marker, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_parse_numbers_are_one_based() {
    assert_eq!(Position::parse("1"), Some(Position::TopLeft));
    assert_eq!(Position::parse("5"), Some(Position::Center));
    assert_eq!(Position::parse("9"), Some(Position::BottomRight));
    assert_eq!(Position::parse("0"), None);
    assert_eq!(Position::parse("10"), None);
}

#[test]
fn test_parse_labels() {
    assert_eq!(Position::parse("Center"), Some(Position::Center));
    assert_eq!(Position::parse("bottom-left"), Some(Position::BottomLeft));
    assert_eq!(Position::parse("Middle Right"), Some(Position::MiddleRight));
    assert_eq!(Position::parse("corner"), None);
}

#[test]
fn test_empty_on_empty_board() {
    let board = Board::new();
    assert_eq!(Position::empty_on(&board).len(), 9);
}

#[test]
fn test_empty_on_filters_occupied() {
    let mut board = Board::new();
    board.place_mark(0, Marker::X).unwrap();
    board.place_mark(4, Marker::O).unwrap();

    let empty = Position::empty_on(&board);
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::TopLeft));
    assert!(!empty.contains(&Position::Center));
    assert!(empty.contains(&Position::BottomRight));
}
