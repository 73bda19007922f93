//! # Loot Generation
//!
//! Picks the loot scattered over a level, weighted towards what the depth
//! allows.

use crate::game::Item;
use crate::generation::{GenerationConfig, Generator};
use crate::{TempleError, TempleResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates the items lying around a level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemGenerator;

impl Generator<Vec<Item>> for ItemGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TempleResult<Vec<Item>> {
        let pool = Item::generated_at(config.depth);
        let count = config.items_per_level + rng.gen_range(0..=2);
        let items = (0..count)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect();
        self.validate(&items, config)?;
        Ok(items)
    }

    fn validate(&self, content: &Vec<Item>, config: &GenerationConfig) -> TempleResult<()> {
        match content.iter().find(|item| item.min_depth > config.depth) {
            Some(item) => Err(TempleError::GenerationFailed(format!(
                "{} is too deep for depth {}",
                item.name, config.depth
            ))),
            None => Ok(()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
