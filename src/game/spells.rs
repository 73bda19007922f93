//! # Spells
//!
//! Spells castable from the spellbook.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spell {
    /// Restores health
    Heal,
    /// Damages the nearest visible monster
    MagicMissile,
}

impl Spell {
    /// Spells learned from a spellbook, in book order.
    pub fn book() -> Vec<Spell> {
        vec![Spell::Heal, Spell::MagicMissile]
    }

    pub fn mana_cost(self) -> i32 {
        match self {
            Spell::Heal => 4,
            Spell::MagicMissile => 3,
        }
    }

    /// Line shown in the spellbook listing.
    pub fn descr(self) -> String {
        let name = match self {
            Spell::Heal => "heal",
            Spell::MagicMissile => "magic missile",
        };
        format!("{name} ({} mana)", self.mana_cost())
    }
}
