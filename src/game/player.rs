//! # Player
//!
//! The player character and every world-mutating operation it can attempt.
//! Failures are reported through the message log and a `false` return; they
//! never abort the turn loop.

use crate::config::{ACTION_POINTS_PER_TURN, INV_SIZE};
use crate::game::{Dice, Item, ItemKind, Level, MessageLog, Position, Spell};
use crate::rendering::{Rgb, LIGHT_BLUE, LIGHT_GREEN, LIGHT_RED, LIGHT_YELLOW, ORANGE, WHITE};
use crate::{TempleError, TempleResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Character classes offered at the start of a playthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameClass {
    #[default]
    Fighter,
    Thief,
    Wizard,
}

impl GameClass {
    pub fn name(self) -> &'static str {
        match self {
            GameClass::Fighter => "Fighter",
            GameClass::Thief => "Thief",
            GameClass::Wizard => "Wizard",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            GameClass::Fighter => LIGHT_RED,
            GameClass::Thief => LIGHT_GREEN,
            GameClass::Wizard => LIGHT_BLUE,
        }
    }

    /// Starting (hp, mp, dice, armor).
    fn base_stats(self) -> (i32, i32, Dice, i32) {
        match self {
            GameClass::Fighter => (30, 0, Dice::new(1, 6), 1),
            GameClass::Thief => (22, 6, Dice::new(1, 5), 0),
            GameClass::Wizard => (18, 20, Dice::new(1, 4), 0),
        }
    }
}

impl FromStr for GameClass {
    type Err = TempleError;

    fn from_str(s: &str) -> TempleResult<Self> {
        match s.to_lowercase().as_str() {
            "fighter" => Ok(GameClass::Fighter),
            "thief" => Ok(GameClass::Thief),
            "wizard" => Ok(GameClass::Wizard),
            other => Err(TempleError::InvalidConfig(format!("unknown class {other:?}"))),
        }
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class: GameClass,
    pub pos: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    /// Experience level
    pub level: u32,
    pub exp: u32,
    pub kills: u32,
    /// Deaths undone in wizard mode
    pub deaths: u32,
    base_dice: Dice,
    base_armor: i32,
    pub items: Vec<Item>,
    pub spells: Vec<Spell>,
    pub has_spellbook: bool,
    /// Cause of death, set once hit points drop to zero
    pub death: Option<String>,
    pub won: bool,
    /// Remaining actions before the world takes its turn
    pub action_points: i32,
}

impl Player {
    /// Creates a fresh character of the given class.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{GameClass, Player, Position};
    ///
    /// let wizard = Player::new("Merlin", GameClass::Wizard, Position::new(1, 1));
    /// assert!(wizard.has_spellbook);
    /// assert_eq!(wizard.action_points, 1);
    /// ```
    pub fn new(name: impl Into<String>, class: GameClass, pos: Position) -> Self {
        let (hp, mp, base_dice, base_armor) = class.base_stats();
        let has_spellbook = class == GameClass::Wizard;
        Self {
            name: name.into(),
            class,
            pos,
            hp,
            max_hp: hp,
            mp,
            max_mp: mp,
            level: 1,
            exp: 0,
            kills: 0,
            deaths: 0,
            base_dice,
            base_armor,
            items: Vec::new(),
            spells: if has_spellbook { Spell::book() } else { Vec::new() },
            has_spellbook,
            death: None,
            won: false,
            action_points: ACTION_POINTS_PER_TURN,
        }
    }

    /// Melee damage dice including the wielded weapon.
    pub fn dice(&self) -> Dice {
        let bonus = self
            .equipped()
            .find_map(|item| match item.kind {
                ItemKind::Weapon { damage_bonus } => Some(damage_bonus),
                _ => None,
            })
            .unwrap_or(0);
        self.base_dice.with_bonus(bonus)
    }

    /// Damage reduction including worn armor.
    pub fn armor(&self) -> i32 {
        self.base_armor
            + self
                .equipped()
                .map(|item| match item.kind {
                    ItemKind::Armor { armor } => armor,
                    _ => 0,
                })
                .sum::<i32>()
    }

    fn equipped(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.equipped)
    }

    pub fn has_equipped(&self, item: &Item) -> bool {
        item.equipped
    }

    /// Experience needed for the next level.
    pub fn max_exp(&self) -> u32 {
        self.level * 10
    }

    pub(crate) fn spend_action(&mut self) {
        self.action_points -= 1;
    }

    /// Grants the next turn's action points.
    pub fn replenish(&mut self) {
        self.action_points = ACTION_POINTS_PER_TURN;
    }

    /// Moves one step or attacks the monster standing there.
    ///
    /// Walls and the map edge block without spending an action.
    pub fn attempt_move(
        &mut self,
        dx: i32,
        dy: i32,
        level: &mut Level,
        log: &mut MessageLog,
        rng: &mut impl Rng,
    ) -> bool {
        let target = self.pos.offset(dx, dy);
        if let Some(index) = level.monster_index_at(target) {
            let monster = &level.monsters[index];
            let damage = (self.dice().roll(rng) - monster.armor).max(0);
            if damage > 0 {
                log.message(format!("you hit the {}.", monster.name.to_lowercase()));
                self.damage_monster(level, index, damage, log);
            } else {
                log.message(format!("you miss the {}.", monster.name.to_lowercase()));
            }
            self.spend_action();
            return true;
        }

        match level.tile_at(target) {
            Some(tile) if tile.kind.is_passable() => {
                self.pos = target;
                match tile.items.as_slice() {
                    [] => {}
                    [item] => log.message(format!("you see {} here.", item.descr)),
                    items => log.message(format!("you see {} items here.", items.len())),
                }
                self.spend_action();
                true
            }
            _ => false,
        }
    }

    fn damage_monster(&mut self, level: &mut Level, index: usize, damage: i32, log: &mut MessageLog) {
        let monster = &mut level.monsters[index];
        monster.hp -= damage;
        if monster.is_dead() {
            let monster = level.monsters.remove(index);
            log.push(format!("the {} dies.", monster.name.to_lowercase()), LIGHT_YELLOW);
            self.kills += 1;
            self.gain_exp(monster.exp, log);
        }
    }

    /// Spends a turn doing nothing.
    pub fn wait(&mut self) {
        self.spend_action();
    }

    /// Takes the `index`-th item from the tile the player stands on.
    pub fn pick_up(&mut self, level: &mut Level, index: usize, log: &mut MessageLog) -> bool {
        let Some(tile) = level.tile_at_mut(self.pos) else {
            return false;
        };
        if index >= tile.items.len() {
            return false;
        }
        if self.items.len() >= INV_SIZE && tile.items[index].kind != ItemKind::Spellbook {
            log.message("your pack is full.");
            return false;
        }
        let item = tile.items.remove(index);
        log.message(format!("you pick up {}.", item.descr));
        self.receive(item, log);
        self.spend_action();
        true
    }

    /// Adds an item to the player, applying special items at once.
    pub fn receive(&mut self, item: Item, log: &mut MessageLog) {
        match item.kind {
            ItemKind::Spellbook => {
                if !self.has_spellbook {
                    self.has_spellbook = true;
                    self.spells = Spell::book();
                    log.push("you can now cast spells.", LIGHT_BLUE);
                }
            }
            ItemKind::TrollIdol => {
                self.won = true;
                log.push("the Troll Idol is yours!", LIGHT_YELLOW);
                self.items.push(item);
            }
            _ => self.items.push(item),
        }
    }

    /// Drops the `index`-th inventory item onto the current tile.
    pub fn drop(&mut self, level: &mut Level, index: usize, log: &mut MessageLog) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let Some(tile) = level.tile_at_mut(self.pos) else {
            return false;
        };
        let mut item = self.items.remove(index);
        item.equipped = false;
        log.message(format!("you drop {}.", item.descr));
        tile.items.push(item);
        self.spend_action();
        true
    }

    /// Uses the `index`-th inventory item: quaff potions, toggle equipment.
    pub fn use_item(&mut self, index: usize, log: &mut MessageLog) -> bool {
        let Some(kind) = self.items.get(index).map(|item| item.kind) else {
            return false;
        };
        match kind {
            ItemKind::HealthPotion { heal } => {
                let item = self.items.remove(index);
                log.message(format!("you drink the {}.", item.descr));
                self.heal(heal);
                log.push("you feel better.", LIGHT_GREEN);
            }
            ItemKind::ManaPotion { restore } => {
                let item = self.items.remove(index);
                log.message(format!("you drink the {}.", item.descr));
                self.mp = (self.mp + restore).min(self.max_mp);
                log.push("your magic returns.", LIGHT_BLUE);
            }
            ItemKind::Weapon { .. } | ItemKind::Armor { .. } => {
                if self.items[index].equipped {
                    self.items[index].equipped = false;
                    log.message(format!("you put away the {}.", self.items[index].descr));
                } else {
                    let slot = self.items[index].slot();
                    for other in self.items.iter_mut().filter(|i| i.slot() == slot) {
                        other.equipped = false;
                    }
                    self.items[index].equipped = true;
                    let verb = if matches!(kind, ItemKind::Weapon { .. }) {
                        "wield"
                    } else {
                        "put on"
                    };
                    log.message(format!("you {verb} the {}.", self.items[index].descr));
                }
            }
            ItemKind::Spellbook | ItemKind::TrollIdol => {
                log.message("you can't use that.");
                return false;
            }
        }
        self.spend_action();
        true
    }

    /// Casts a spell, spending mana.
    pub fn use_spell(
        &mut self,
        spell: Spell,
        level: &mut Level,
        log: &mut MessageLog,
        rng: &mut impl Rng,
    ) -> bool {
        if self.mp < spell.mana_cost() {
            log.message("you don't have enough mana.");
            return false;
        }
        match spell {
            Spell::Heal => {
                self.heal(10);
                log.push("you feel better.", LIGHT_GREEN);
            }
            Spell::MagicMissile => {
                let target = level
                    .monsters
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| level.is_visible(m.pos))
                    .min_by_key(|(_, m)| m.pos.chebyshev_distance(self.pos))
                    .map(|(i, _)| i);
                let Some(index) = target else {
                    log.message("there is no one in sight.");
                    return false;
                };
                let damage = Dice::new(2, 4).roll(rng);
                log.push(
                    format!("the missile strikes the {}.", level.monsters[index].name.to_lowercase()),
                    ORANGE,
                );
                self.damage_monster(level, index, damage, log);
            }
        }
        self.mp -= spell.mana_cost();
        self.spend_action();
        true
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn regenerate(&mut self) {
        self.heal(1);
        self.mp = (self.mp + 1).min(self.max_mp);
    }

    /// Loses hit points, dying at zero.
    pub fn take_damage(&mut self, amount: i32, cause: &str) {
        self.hp -= amount;
        if self.hp <= 0 && self.death.is_none() {
            self.death = Some(cause.to_string());
        }
    }

    /// Undoes a death, restoring at least half of the maximum health.
    pub fn resurrect(&mut self) {
        self.death = None;
        self.deaths += 1;
        self.hp = self.hp.max(self.max_hp / 2).max(1);
    }

    fn gain_exp(&mut self, amount: u32, log: &mut MessageLog) {
        self.exp += amount;
        while self.exp >= self.max_exp() {
            self.exp -= self.max_exp();
            self.advance(log);
        }
    }

    /// Gains one experience level.
    pub fn advance(&mut self, log: &mut MessageLog) {
        self.level += 1;
        self.max_hp += 5;
        self.hp = self.max_hp;
        if self.max_mp > 0 {
            self.max_mp += 2;
            self.mp = self.max_mp;
        }
        log.push(format!("welcome to level {}!", self.level), WHITE);
    }
}
