//! # Troll Temple Main Entry Point
//!
//! Parses the command line, loads settings, and runs the game either in a
//! macroquad window or headless against a key script.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::next_frame;
use macroquad::window::Conf;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use troll_temple::{
    window_size, window_title, Flow, FrameRenderer, Game, GameClass, GameSession, GameSettings,
    MacroquadDisplay, Renderer, ScriptedInput, TempleResult,
};

/// Command line arguments for Troll Temple.
#[derive(Parser, Debug)]
#[command(name = "troll-temple")]
#[command(about = "A turn-based dungeon crawler: find the Troll Idol at the bottom of the temple")]
#[command(version)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable wizard mode (resurrection, debug console, free descending)
    #[arg(long)]
    wizard: bool,

    /// Character class: fighter, thief or wizard
    #[arg(long)]
    class: Option<GameClass>,

    /// Replay a key script headlessly instead of opening a window
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    info!("Starting Troll Temple v{}", troll_temple::VERSION);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> TempleResult<()> {
    let settings = load_settings(args)?;
    match &args.script {
        Some(script) => run_script(&settings, script),
        None => run_window(settings),
    }
}

/// File settings first, then command line overrides.
fn load_settings(args: &Args) -> TempleResult<GameSettings> {
    let mut settings = match &args.config {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.wizard {
        settings.wizard = true;
    }
    if let Some(class) = args.class {
        settings.class = class;
    }
    settings.validate()?;
    Ok(settings)
}

/// Replays a key script and prints the final screen.
fn run_script(settings: &GameSettings, script: &Path) -> TempleResult<()> {
    let mut input = ScriptedInput::from_file(script)?;
    info!("replaying {} keys from {}", input.remaining(), script.display());
    let mut game = Game::new(GameSession::new(settings)?, FrameRenderer::new());
    let flow = game.run(&mut input);
    for y in 0..game.renderer.last.height {
        println!("{}", game.renderer.last.row_text(y).trim_end());
    }
    info!(
        "script finished ({:?}) after {} frames",
        flow, game.renderer.frames
    );
    Ok(())
}

/// Opens the window and feeds key presses to the loop once per frame.
fn run_window(settings: GameSettings) -> TempleResult<()> {
    let session = GameSession::new(&settings)?;
    let (width, height) = window_size(settings.font_size);
    let conf = Conf {
        window_title: window_title(settings.wizard),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    };

    info!("Initializing macroquad display");
    macroquad::Window::from_config(conf, async move {
        let mut game = Game::new(session, MacroquadDisplay::new(settings.font_size));
        game.start();
        loop {
            for key in game.renderer.pressed_keys() {
                if game.handle_key(key) == Flow::Terminated {
                    break;
                }
            }
            if game.is_terminated() {
                game.renderer.teardown();
                break;
            }
            game.renderer.draw();
            next_frame().await;
        }
        info!("Game loop ended after {} turns", game.session.turns);
    });
    Ok(())
}
