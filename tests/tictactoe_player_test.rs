//! Tests for players.

use strictly_scoreboard::{Marker, Player};

#[test]
fn test_new_player_has_zero_score() {
    let player = Player::new("Ada", Marker::X);
    assert_eq!(player.name(), "Ada");
    assert_eq!(player.marker(), Marker::X);
    assert_eq!(player.score(), 0);
}

#[test]
fn test_score_increments_and_resets() {
    let mut player = Player::new("Ada", Marker::O);
    player.increment_score();
    player.increment_score();
    assert_eq!(player.score(), 2);

    player.reset_score();
    assert_eq!(player.score(), 0);
}

#[test]
fn test_rename_keeps_marker_and_score() {
    let mut player = Player::new("Ada", Marker::O);
    player.increment_score();
    player.rename("Grace");
    assert_eq!(player.name(), "Grace");
    assert_eq!(player.marker(), Marker::O);
    assert_eq!(player.score(), 1);

    player.rename("");
    assert_eq!(player.name(), "");
}
