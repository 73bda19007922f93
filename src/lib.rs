//! # Troll Temple
//!
//! A small turn-based dungeon crawler rendered as a grid of colored glyphs on a
//! fixed-size console-style screen.
//!
//! ## Architecture Overview
//!
//! - **Game Session**: explicit context object holding the player, the current
//!   level, the turn counter and the message log
//! - **Command Table**: static mapping from keys to tagged command values
//! - **Scene Stack**: the turn loop plus modal screens (prompts, item and spell
//!   selection, look mode, debug console) that capture input until they exit
//! - **Generation System**: room-and-corridor levels populated per depth
//! - **Rendering System**: glyph frames composed headlessly and blitted with
//!   macroquad
//!
//! ## Turn Structure
//!
//! The player spends action points on turn-consuming commands. Once the
//! counter reaches zero the world advances one discrete turn, the frame is
//! redrawn and the terminal conditions (death, victory) are checked.

pub mod debug;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod settings;
pub mod utils;

// Core module re-exports
pub use debug::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use settings::*;

/// Core error type for the Troll Temple engine.
#[derive(thiserror::Error, Debug)]
pub enum TempleError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A level layout could not be built
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Settings are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Troll Temple codebase.
pub type TempleResult<T> = Result<T, TempleError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window and game title.
pub const TITLE: &str = "Troll Temple";

/// Game configuration constants.
pub mod config {
    /// Screen width in glyph cells
    pub const SCREEN_W: i32 = 100;

    /// Screen height in glyph cells
    pub const SCREEN_H: i32 = 30;

    /// Dungeon width in tiles
    pub const MAP_W: i32 = 60 - 2;

    /// Dungeon height in tiles
    pub const MAP_H: i32 = SCREEN_H - 2;

    /// Number of message lines shown in the message panel
    pub const BUFFER_H: usize = (SCREEN_H / 2 + 1) as usize;

    /// Number of inventory entries shown on one page
    pub const INV_SIZE: usize = (SCREEN_H - 4) as usize;

    /// Number of spellbook entries shown on one page
    pub const BOOK_SIZE: usize = (SCREEN_H - 4) as usize;

    /// Deepest dungeon level
    pub const MAX_DLEVEL: u32 = 12;

    /// Field of view radius in tiles
    pub const SIGHT_RADIUS: i32 = 8;

    /// Action points granted to the player each world turn
    pub const ACTION_POINTS_PER_TURN: i32 = 1;
}
