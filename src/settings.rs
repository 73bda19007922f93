//! # Settings
//!
//! Runtime settings loaded from a JSON file and overridden by command line
//! flags.

use crate::game::GameClass;
use crate::{TempleError, TempleResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one playthrough.
///
/// Missing fields fall back to their defaults, so an empty JSON object is a
/// valid settings file.
///
/// # Examples
///
/// ```
/// use troll_temple::{GameClass, GameSettings};
///
/// let settings: GameSettings = serde_json::from_str(r#"{"wizard": true}"#).unwrap();
/// assert!(settings.wizard);
/// assert_eq!(settings.class, GameClass::Fighter);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Seed for the session's random number generator; random when absent
    pub seed: Option<u64>,
    /// Enables resurrection, the debug console and free descending
    pub wizard: bool,
    pub class: GameClass,
    /// Glyph size in pixels
    pub font_size: f32,
    pub player_name: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            wizard: false,
            class: GameClass::default(),
            font_size: 20.0,
            player_name: "Player".to_string(),
        }
    }
}

impl GameSettings {
    /// Reads and validates a settings file.
    pub fn load(path: impl AsRef<Path>) -> TempleResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let settings: GameSettings = serde_json::from_str(&text)?;
        settings.validate()?;
        info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Writes the settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> TempleResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> TempleResult<()> {
        if !(self.font_size > 0.0) {
            return Err(TempleError::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.player_name.trim().is_empty() {
            return Err(TempleError::InvalidConfig("player name is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let settings = GameSettings {
            font_size: 0.0,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(TempleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_class_is_lowercase_in_json() {
        let settings: GameSettings = serde_json::from_str(r#"{"class": "thief"}"#).unwrap();
        assert_eq!(settings.class, GameClass::Thief);
        assert!(serde_json::from_str::<GameSettings>(r#"{"class": "bard"}"#).is_err());
    }
}
