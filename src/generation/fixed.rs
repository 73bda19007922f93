//! # Fixed Layouts
//!
//! Serves hand-drawn ASCII levels instead of carving new ones.

use crate::game::Level;
use crate::generation::{GenerationConfig, Generator};
use crate::{TempleError, TempleResult};
use rand::rngs::StdRng;

/// Hand-drawn levels, one per depth; depths past the end reuse the last one.
#[derive(Debug, Clone, Default)]
pub struct FixedLayouts {
    layouts: Vec<Vec<String>>,
}

impl FixedLayouts {
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{create_rng, FixedLayouts, GenerationConfig, Generator};
    ///
    /// let layouts = FixedLayouts::new(vec![vec!["###", "#@#", "###"]]);
    /// let config = GenerationConfig::new(0).at_depth(4);
    /// let level = layouts.generate(&config, &mut create_rng(&config)).unwrap();
    /// assert_eq!(level.depth, 4);
    /// ```
    pub fn new<S: AsRef<str>>(layouts: Vec<Vec<S>>) -> Self {
        Self {
            layouts: layouts
                .into_iter()
                .map(|rows| rows.iter().map(|r| r.as_ref().to_string()).collect())
                .collect(),
        }
    }
}

impl Generator<Level> for FixedLayouts {
    fn generate(&self, config: &GenerationConfig, _rng: &mut StdRng) -> TempleResult<Level> {
        let index = (config.depth.max(1) as usize - 1).min(self.layouts.len().saturating_sub(1));
        let rows = self
            .layouts
            .get(index)
            .ok_or_else(|| TempleError::GenerationFailed("no layouts".to_string()))?;
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let level = Level::from_ascii(config.depth, &rows)?;
        self.validate(&level, config)?;
        Ok(level)
    }

    fn validate(&self, level: &Level, _config: &GenerationConfig) -> TempleResult<()> {
        match level.player_spawn {
            Some(spawn) if level.monster_at(spawn).is_some() => Err(TempleError::InvalidLevel(
                "monster on the arrival point".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "FixedLayouts"
    }
}
