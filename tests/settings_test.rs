//! Tests for the settings file.

use std::io::Write;
use strictly_scoreboard::GameSettings;
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let settings = GameSettings::default();
    assert_eq!(settings.player1_name(), "Player 1");
    assert_eq!(settings.player2_name(), "Player 2");
    assert_eq!(settings.log_file().to_str(), Some("tictactoe.log"));
}

#[test]
fn test_load_full_file() {
    let file = settings_file(
        r#"
player1_name = "Ada"
player2_name = "Grace"
log_file = "/tmp/ttt.log"
"#,
    );
    let settings = GameSettings::from_file(file.path()).unwrap();
    assert_eq!(settings.player1_name(), "Ada");
    assert_eq!(settings.player2_name(), "Grace");
    assert_eq!(settings.log_file().to_str(), Some("/tmp/ttt.log"));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = settings_file("player2_name = \"Grace\"\n");
    let settings = GameSettings::from_file(file.path()).unwrap();
    assert_eq!(settings.player1_name(), "Player 1");
    assert_eq!(settings.player2_name(), "Grace");
}

#[test]
fn test_invalid_file_is_an_error() {
    let file = settings_file("player1_name = 42\n");
    let err = GameSettings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));

    let file = settings_file("colour = \"blue\"\n");
    assert!(GameSettings::from_file(file.path()).is_err());
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GameSettings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, GameSettings::default());
}

#[test]
fn test_player_names_fall_back_on_blank() {
    let settings = GameSettings::default();
    assert_eq!(
        settings.player_names(Some("Ada"), None),
        ("Ada".to_string(), "Player 2".to_string())
    );
    assert_eq!(
        settings.player_names(Some("  "), Some(" Grace ")),
        ("Player 1".to_string(), "Grace".to_string())
    );
}
