//! Shared builders for the integration tests.

#![allow(dead_code)]

use troll_temple::{
    FixedLayouts, FrameRenderer, Game, GameSession, GameSettings, GenerationConfig, Key,
};

/// Starts a game on hand-drawn levels, one per depth.
pub fn game_with(layouts: Vec<Vec<&str>>, settings: GameSettings) -> Game<FrameRenderer> {
    let session = GameSession::with_generator(
        &settings,
        Box::new(FixedLayouts::new(layouts)),
        GenerationConfig::for_testing(17),
    )
    .expect("fixed layout session");
    let mut game = Game::new(session, FrameRenderer::new());
    game.start();
    game
}

/// Starts a fighter's game on a single level.
pub fn game_on(rows: &[&str]) -> Game<FrameRenderer> {
    game_with(vec![rows.to_vec()], GameSettings::default())
}

/// Starts a wizard-mode game on a single level.
pub fn wizard_game_on(rows: &[&str]) -> Game<FrameRenderer> {
    let settings = GameSettings {
        wizard: true,
        ..GameSettings::default()
    };
    game_with(vec![rows.to_vec()], settings)
}

pub fn press(game: &mut Game<FrameRenderer>, keys: &[Key]) {
    for &key in keys {
        game.handle_key(key);
    }
}

pub fn type_text(game: &mut Game<FrameRenderer>, text: &str) {
    for c in text.chars() {
        let key = if c == ' ' { Key::Space } else { Key::Char(c) };
        game.handle_key(key);
    }
}
