//! # Items
//!
//! The item catalogue and per-item behavior flags.

use crate::rendering::{
    Rgb, BROWN, LIGHT_BLUE, LIGHT_GREY, LIGHT_RED, LIGHT_YELLOW, ORANGE, WHITE,
};
use serde::{Deserialize, Serialize};

/// What an item does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores health
    HealthPotion { heal: i32 },
    /// Restores mana
    ManaPotion { restore: i32 },
    /// Wielded weapon adding damage die sides
    Weapon { damage_bonus: u32 },
    /// Worn armor reducing incoming damage
    Armor { armor: i32 },
    /// Grants the spellbook and its spells
    Spellbook,
    /// Picking it up wins the game
    TrollIdol,
}

/// Equipment slot an item occupies when equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Wielded,
    Worn,
}

/// An item lying on a tile or carried by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalogue name, matched case-insensitively by the debug console
    pub name: String,
    /// Human readable description
    pub descr: String,
    pub glyph: char,
    pub color: Rgb,
    pub kind: ItemKind,
    /// Shallowest depth where the item is generated
    pub min_depth: u32,
    pub equipped: bool,
}

struct ItemTemplate {
    name: &'static str,
    descr: &'static str,
    glyph: char,
    color: Rgb,
    kind: ItemKind,
    min_depth: u32,
}

const ITEM_TEMPLATES: &[ItemTemplate] = &[
    ItemTemplate {
        name: "HealthPotion",
        descr: "potion of healing",
        glyph: '!',
        color: LIGHT_RED,
        kind: ItemKind::HealthPotion { heal: 15 },
        min_depth: 1,
    },
    ItemTemplate {
        name: "ManaPotion",
        descr: "potion of mana",
        glyph: '!',
        color: LIGHT_BLUE,
        kind: ItemKind::ManaPotion { restore: 10 },
        min_depth: 2,
    },
    ItemTemplate {
        name: "Dagger",
        descr: "dagger",
        glyph: '(',
        color: LIGHT_GREY,
        kind: ItemKind::Weapon { damage_bonus: 1 },
        min_depth: 1,
    },
    ItemTemplate {
        name: "ShortSword",
        descr: "short sword",
        glyph: '(',
        color: WHITE,
        kind: ItemKind::Weapon { damage_bonus: 2 },
        min_depth: 3,
    },
    ItemTemplate {
        name: "Axe",
        descr: "battle axe",
        glyph: '(',
        color: ORANGE,
        kind: ItemKind::Weapon { damage_bonus: 4 },
        min_depth: 6,
    },
    ItemTemplate {
        name: "LeatherArmor",
        descr: "leather armor",
        glyph: '[',
        color: BROWN,
        kind: ItemKind::Armor { armor: 1 },
        min_depth: 1,
    },
    ItemTemplate {
        name: "ChainMail",
        descr: "chain mail",
        glyph: '[',
        color: LIGHT_GREY,
        kind: ItemKind::Armor { armor: 2 },
        min_depth: 4,
    },
    ItemTemplate {
        name: "PlateMail",
        descr: "plate mail",
        glyph: '[',
        color: WHITE,
        kind: ItemKind::Armor { armor: 4 },
        min_depth: 8,
    },
    ItemTemplate {
        name: "Spellbook",
        descr: "spellbook",
        glyph: '?',
        color: LIGHT_BLUE,
        kind: ItemKind::Spellbook,
        min_depth: 2,
    },
    ItemTemplate {
        name: "TrollIdol",
        descr: "the Troll Idol",
        glyph: '&',
        color: LIGHT_YELLOW,
        kind: ItemKind::TrollIdol,
        min_depth: u32::MAX,
    },
];

impl Item {
    /// Builds a catalogue item by case-insensitive name.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::Item;
    ///
    /// let potion = Item::from_name("healthpotion").unwrap();
    /// assert_eq!(potion.name, "HealthPotion");
    /// assert!(Item::from_name("banana").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Item> {
        ITEM_TEMPLATES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(Item::from_template)
    }

    /// All catalogue names in catalogue order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ITEM_TEMPLATES.iter().map(|t| t.name)
    }

    /// Catalogue items that may be generated at `depth`.
    pub fn generated_at(depth: u32) -> Vec<Item> {
        ITEM_TEMPLATES
            .iter()
            .filter(|t| t.min_depth <= depth)
            .map(Item::from_template)
            .collect()
    }

    fn from_template(t: &ItemTemplate) -> Item {
        Item {
            name: t.name.to_string(),
            descr: t.descr.to_string(),
            glyph: t.glyph,
            color: t.color,
            kind: t.kind,
            min_depth: t.min_depth,
            equipped: false,
        }
    }

    /// Slot the item goes into when equipped, if any.
    pub fn slot(&self) -> Option<Slot> {
        match self.kind {
            ItemKind::Weapon { .. } => Some(Slot::Wielded),
            ItemKind::Armor { .. } => Some(Slot::Worn),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<_> = Item::names().map(str::to_lowercase).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_idol_is_never_generated() {
        for depth in 1..=crate::config::MAX_DLEVEL {
            assert!(Item::generated_at(depth)
                .iter()
                .all(|item| item.kind != ItemKind::TrollIdol));
        }
    }

    #[test]
    fn test_deeper_levels_offer_more_items() {
        assert!(Item::generated_at(8).len() > Item::generated_at(1).len());
    }

    #[test]
    fn test_slots() {
        assert_eq!(Item::from_name("dagger").unwrap().slot(), Some(Slot::Wielded));
        assert_eq!(Item::from_name("chainmail").unwrap().slot(), Some(Slot::Worn));
        assert_eq!(Item::from_name("healthpotion").unwrap().slot(), None);
    }
}
