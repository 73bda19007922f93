//! # Monsters
//!
//! Monster catalogue and per-monster combat state.

use crate::game::{Dice, Position};
use crate::rendering::{Rgb, BROWN, GREEN, LIGHT_GREEN, LIGHT_GREY, LIGHT_RED, ORANGE, VIOLET};
use serde::{Deserialize, Serialize};

/// A monster living on a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Catalogue name, matched case-insensitively by the debug console
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub pos: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub dice: Dice,
    pub armor: i32,
    /// Experience granted to the player on kill
    pub exp: u32,
}

struct MonsterTemplate {
    name: &'static str,
    glyph: char,
    color: Rgb,
    hp: i32,
    dice: Dice,
    armor: i32,
    exp: u32,
    min_depth: u32,
}

const MONSTER_TEMPLATES: &[MonsterTemplate] = &[
    MonsterTemplate {
        name: "Rat",
        glyph: 'r',
        color: BROWN,
        hp: 3,
        dice: Dice::new(1, 2),
        armor: 0,
        exp: 1,
        min_depth: 1,
    },
    MonsterTemplate {
        name: "Kobold",
        glyph: 'k',
        color: LIGHT_GREY,
        hp: 5,
        dice: Dice::new(1, 3),
        armor: 0,
        exp: 2,
        min_depth: 1,
    },
    MonsterTemplate {
        name: "Goblin",
        glyph: 'g',
        color: LIGHT_GREEN,
        hp: 7,
        dice: Dice::new(1, 4),
        armor: 1,
        exp: 3,
        min_depth: 2,
    },
    MonsterTemplate {
        name: "Orc",
        glyph: 'o',
        color: GREEN,
        hp: 12,
        dice: Dice::new(2, 3),
        armor: 1,
        exp: 5,
        min_depth: 4,
    },
    MonsterTemplate {
        name: "Ogre",
        glyph: 'O',
        color: ORANGE,
        hp: 20,
        dice: Dice::new(2, 5),
        armor: 2,
        exp: 9,
        min_depth: 7,
    },
    MonsterTemplate {
        name: "Wraith",
        glyph: 'W',
        color: VIOLET,
        hp: 18,
        dice: Dice::new(2, 4),
        armor: 3,
        exp: 10,
        min_depth: 9,
    },
    MonsterTemplate {
        name: "Troll",
        glyph: 'T',
        color: LIGHT_RED,
        hp: 30,
        dice: Dice::new(3, 4),
        armor: 3,
        exp: 15,
        min_depth: 10,
    },
];

impl Monster {
    /// Builds a catalogue monster by case-insensitive name.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{Monster, Position};
    ///
    /// let rat = Monster::from_name("RAT", Position::new(1, 1)).unwrap();
    /// assert_eq!(rat.name, "Rat");
    /// assert_eq!(rat.hp, rat.max_hp);
    /// ```
    pub fn from_name(name: &str, pos: Position) -> Option<Monster> {
        MONSTER_TEMPLATES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| Monster::from_template(t, pos))
    }

    /// Builds the catalogue monster drawn with `glyph`, used by ASCII layouts.
    pub fn from_glyph(glyph: char, pos: Position) -> Option<Monster> {
        MONSTER_TEMPLATES
            .iter()
            .find(|t| t.glyph == glyph)
            .map(|t| Monster::from_template(t, pos))
    }

    /// All catalogue names in catalogue order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        MONSTER_TEMPLATES.iter().map(|t| t.name)
    }

    /// Names of monsters that may be generated at `depth`.
    pub fn names_at(depth: u32) -> Vec<&'static str> {
        MONSTER_TEMPLATES
            .iter()
            .filter(|t| t.min_depth <= depth)
            .map(|t| t.name)
            .collect()
    }

    fn from_template(t: &MonsterTemplate, pos: Position) -> Monster {
        Monster {
            name: t.name.to_string(),
            glyph: t.glyph,
            color: t.color,
            pos,
            hp: t.hp,
            max_hp: t.hp,
            dice: t.dice,
            armor: t.armor,
            exp: t.exp,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
