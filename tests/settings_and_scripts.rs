//! Settings files and scripted, headless sessions.

use std::fs;
use tempfile::TempDir;
use troll_temple::{
    Flow, FrameRenderer, Game, GameClass, GameSession, GameSettings, ScriptedInput, TempleError,
    TempleResult,
};

fn seeded(seed: u64) -> GameSettings {
    GameSettings {
        seed: Some(seed),
        ..GameSettings::default()
    }
}

#[test]
fn test_settings_file_is_read_back() -> TempleResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    let settings = GameSettings {
        seed: Some(99),
        wizard: true,
        class: GameClass::Thief,
        font_size: 16.0,
        player_name: "Grima".to_string(),
    };

    settings.save(&path)?;
    assert_eq!(GameSettings::load(&path)?, settings);
    Ok(())
}

#[test]
fn test_partial_settings_file_uses_defaults() -> TempleResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "wizard": true }"#)?;

    let settings = GameSettings::load(&path)?;
    assert!(settings.wizard);
    assert_eq!(settings.seed, None);
    assert_eq!(settings.player_name, "Player");
    Ok(())
}

#[test]
fn test_bad_settings_files_are_rejected() -> TempleResult<()> {
    let dir = TempDir::new()?;

    let missing = GameSettings::load(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(TempleError::Io(_))));

    let garbled = dir.path().join("garbled.json");
    fs::write(&garbled, "{ font_size: ")?;
    assert!(matches!(GameSettings::load(&garbled), Err(TempleError::Serde(_))));

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, r#"{ "font_size": 0.0 }"#)?;
    assert!(matches!(
        GameSettings::load(&invalid),
        Err(TempleError::InvalidConfig(_))
    ));
    Ok(())
}

#[test]
fn test_same_seed_same_dungeon() -> TempleResult<()> {
    let first = GameSession::new(&seeded(1234))?;
    let second = GameSession::new(&seeded(1234))?;

    assert_eq!(first.player.pos, second.player.pos);
    assert_eq!(first.level.monsters, second.level.monsters);
    assert_eq!(first.level.depth, 1);
    Ok(())
}

#[test]
fn test_script_file_drives_a_session_to_quit() -> TempleResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quit.keys");
    fs::write(&path, "# look around, then leave\nl kp8 kp2 esc\nnonsense\nesc y\n")?;

    let mut input = ScriptedInput::from_file(&path)?;
    assert_eq!(input.remaining(), 6);

    let mut game = Game::new(GameSession::new(&seeded(7))?, FrameRenderer::new());
    assert_eq!(game.run(&mut input), Flow::Terminated);
    assert_eq!(game.session.turns, 0);
    assert_eq!(input.remaining(), 0);
    assert!(game.renderer.torn_down);
    Ok(())
}

#[test]
fn test_script_running_out_leaves_the_game_open() -> TempleResult<()> {
    let mut input = ScriptedInput::from_script("kp5\nkp5\n");
    let mut game = Game::new(GameSession::new(&seeded(7))?, FrameRenderer::new());

    let flow = game.run(&mut input);

    // Two waits are harmless unless a monster starts next to the player
    if !game.session.is_dead() {
        assert_eq!(flow, Flow::Continue);
        assert_eq!(game.session.turns, 2);
    }
    assert!(game.renderer.last.contains("Troll Temple"));
    Ok(())
}
