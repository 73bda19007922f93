//! # Encounter Generation
//!
//! Chooses which monsters live on a level. Deeper levels hold more and
//! stronger monsters.

use crate::game::{Monster, Position};
use crate::generation::{GenerationConfig, Generator};
use crate::{TempleError, TempleResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a level's monsters. Positions are assigned by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncounterGenerator;

impl EncounterGenerator {
    fn monster_count(config: &GenerationConfig, rng: &mut StdRng) -> u32 {
        config.monsters_per_level + config.depth / 2 + rng.gen_range(0..=2)
    }
}

impl Generator<Vec<Monster>> for EncounterGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TempleResult<Vec<Monster>> {
        let names = Monster::names_at(config.depth);
        if names.is_empty() {
            return Err(TempleError::GenerationFailed(format!(
                "no monsters live at depth {}",
                config.depth
            )));
        }
        let count = Self::monster_count(config, rng);
        let monsters = (0..count)
            .filter_map(|_| names.choose(rng))
            .filter_map(|name| Monster::from_name(name, Position::origin()))
            .collect();
        Ok(monsters)
    }

    fn validate(&self, content: &Vec<Monster>, _config: &GenerationConfig) -> TempleResult<()> {
        if content.iter().any(Monster::is_dead) {
            return Err(TempleError::GenerationFailed("generated a dead monster".to_string()));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}
