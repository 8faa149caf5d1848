//! Config loading through the facade, as the binary uses it

use std::fs;

use fallgrid::config::{Config, ConfigError, ConfigSource};
use fallgrid::core::Game;
use fallgrid::types::GameStatus;

#[test]
fn test_file_config_drives_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[board]\nwidth = 8\nheight = 12\n\n[timing]\ndescent_interval_ms = 250\n",
    )
    .unwrap();

    let (config, source) = Config::discover_in(Some(&path), None, None).unwrap();
    assert_eq!(source, ConfigSource::File(path.clone()));

    let game_config = config.game_config((39, 22)).unwrap();
    let mut game = Game::new(game_config, 3);
    assert_eq!((game.board().width(), game.board().height()), (8, 12));

    assert!(game.tick(249).is_none());
    assert!(game.tick(1).is_some());
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_terminal_fit_fills_width_and_caps_height() {
    let config = Config::default();
    let game_config = config.game_config((39, 22)).unwrap();
    assert_eq!(game_config.board_width, 39);
    assert_eq!(game_config.board_height, 20);

    let short = config.game_config((39, 9)).unwrap();
    assert_eq!(short.board_height, 9);
}

#[test]
fn test_tiny_terminal_is_rejected() {
    let err = Config::default().game_config((3, 22)).unwrap_err();
    assert!(matches!(err, ConfigError::BoardTooSmall { width: 3, .. }));
}

#[test]
fn test_missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("nope.toml");
    let (config, source) = Config::discover_in(None, None, Some(&absent)).unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config, Config::default());
}
