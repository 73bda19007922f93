//! # Levels
//!
//! One dungeon level: a grid of tiles with item piles, the monsters living on
//! it, and the player's field of view.

use crate::game::{Item, MessageLog, Monster, Player, Position};
use crate::rendering::{Rgb, DARK_GREY, LIGHT_GREY, LIGHT_RED, ORANGE, WHITE};
use crate::utils::{line, next_step};
use crate::{TempleError, TempleResult};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Every how many world turns the player regenerates one hit point.
const REGEN_INTERVAL: u64 = 10;

/// Kinds of terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    StairsDown,
}

impl TileKind {
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Wall => "wall",
            TileKind::Floor => "floor",
            TileKind::StairsDown => "stairs down",
        }
    }

    pub fn glyph(self) -> (char, Rgb) {
        match self {
            TileKind::Wall => ('#', LIGHT_GREY),
            TileKind::Floor => ('.', DARK_GREY),
            TileKind::StairsDown => ('>', ORANGE),
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

/// A single map cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Items lying on the tile, in drop order
    pub items: Vec<Item>,
    /// Seen at least once
    pub explored: bool,
    /// Currently in the player's field of view
    pub visible: bool,
}

impl Tile {
    fn new(kind: TileKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            explored: false,
            visible: false,
        }
    }
}

/// A dungeon level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Dungeon depth, starting at 1
    pub depth: u32,
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
    pub monsters: Vec<Monster>,
    /// Fixed arrival point, otherwise the player lands on a random empty tile
    pub player_spawn: Option<Position>,
}

impl Level {
    /// Creates a level filled with walls.
    pub fn new(depth: u32, width: i32, height: i32) -> Self {
        Self {
            depth,
            width,
            height,
            tiles: vec![Tile::new(TileKind::Wall); (width.max(0) * height.max(0)) as usize],
            monsters: Vec::new(),
            player_spawn: None,
        }
    }

    /// Parses a hand-drawn layout.
    ///
    /// `#` wall, `.` floor, `>` stairs down, `@` player arrival point,
    /// monster letters from the catalogue, and `!` potion, `(` dagger,
    /// `[` leather armor, `?` spellbook, `&` the Troll Idol on floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{Level, Position, TileKind};
    ///
    /// let level = Level::from_ascii(1, &["#####", "#@.>#", "#####"]).unwrap();
    /// assert_eq!(level.player_spawn, Some(Position::new(1, 1)));
    /// assert_eq!(level.tile_at(Position::new(3, 1)).unwrap().kind, TileKind::StairsDown);
    /// ```
    pub fn from_ascii(depth: u32, rows: &[&str]) -> TempleResult<Level> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        if width == 0 || height == 0 {
            return Err(TempleError::InvalidLevel("empty layout".to_string()));
        }

        let mut level = Level::new(depth, width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(TempleError::InvalidLevel(format!(
                    "row {y} is not {width} cells wide"
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                let item = match c {
                    '!' => Item::from_name("HealthPotion"),
                    '(' => Item::from_name("Dagger"),
                    '[' => Item::from_name("LeatherArmor"),
                    '?' => Item::from_name("Spellbook"),
                    '&' => Item::from_name("TrollIdol"),
                    _ => None,
                };
                let kind = match c {
                    '#' => TileKind::Wall,
                    '>' => TileKind::StairsDown,
                    '.' | '@' => TileKind::Floor,
                    _ if item.is_some() => TileKind::Floor,
                    _ => match Monster::from_glyph(c, pos) {
                        Some(monster) => {
                            level.monsters.push(monster);
                            TileKind::Floor
                        }
                        None => {
                            return Err(TempleError::InvalidLevel(format!(
                                "unknown cell {c:?} at ({x}, {y})"
                            )))
                        }
                    },
                };
                level.set_kind(pos, kind);
                if let (Some(item), Some(tile)) = (item, level.tile_at_mut(pos)) {
                    tile.items.push(item);
                }
                if c == '@' {
                    level.player_spawn = Some(pos);
                }
            }
        }
        Ok(level)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_at_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.index(pos).map(move |i| &mut self.tiles[i])
    }

    pub fn set_kind(&mut self, pos: Position, kind: TileKind) {
        if let Some(tile) = self.tile_at_mut(pos) {
            tile.kind = kind;
        }
    }

    /// All positions of the level in row order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some_and(|t| t.visible)
    }

    pub fn monster_at(&self, pos: Position) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.pos == pos)
    }

    pub fn monster_index_at(&self, pos: Position) -> Option<usize> {
        self.monsters.iter().position(|m| m.pos == pos)
    }

    /// Passable terrain without a monster on it.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some_and(|t| t.kind.is_passable()) && self.monster_at(pos).is_none()
    }

    /// Picks a floor tile with no monster and no items.
    pub fn random_empty_tile(&self, rng: &mut impl Rng) -> Option<Position> {
        let candidates: Vec<Position> = self
            .positions()
            .filter(|&p| {
                self.is_walkable(p)
                    && self
                        .tile_at(p)
                        .is_some_and(|t| t.kind == TileKind::Floor && t.items.is_empty())
            })
            .collect();
        candidates.choose(rng).copied()
    }

    /// Recomputes the field of view around `origin`.
    pub fn update_visibility(&mut self, origin: Position, radius: i32) {
        for tile in &mut self.tiles {
            tile.visible = false;
        }
        for y in (origin.y - radius)..=(origin.y + radius) {
            for x in (origin.x - radius)..=(origin.x + radius) {
                let target = Position::new(x, y);
                if !self.in_bounds(target) || origin.euclidean_distance(target) > radius as f64 {
                    continue;
                }
                if self.has_line_of_sight(origin, target) {
                    if let Some(tile) = self.tile_at_mut(target) {
                        tile.visible = true;
                        tile.explored = true;
                    }
                }
            }
        }
    }

    fn has_line_of_sight(&self, from: Position, to: Position) -> bool {
        let path = line(from, to);
        // Endpoints never block: walls themselves are seen.
        path.iter()
            .skip(1)
            .take(path.len().saturating_sub(2))
            .all(|&p| self.tile_at(p).is_some_and(|t| t.kind.is_passable()))
    }

    /// Runs one world turn: monsters act, then the player regenerates.
    pub fn advance_one_turn(
        &mut self,
        turn: u64,
        player: &mut Player,
        log: &mut MessageLog,
        rng: &mut impl Rng,
    ) {
        for i in 0..self.monsters.len() {
            if player.death.is_some() {
                break;
            }
            let pos = self.monsters[i].pos;
            if pos.chebyshev_distance(player.pos) == 1 {
                let monster = &self.monsters[i];
                let damage = (monster.dice.roll(rng) - player.armor()).max(0);
                if damage > 0 {
                    log.push(format!("the {} hits you.", monster.name.to_lowercase()), LIGHT_RED);
                    let cause = format!("killed by a {}", monster.name.to_lowercase());
                    player.take_damage(damage, &cause);
                } else {
                    log.push(format!("the {} misses you.", monster.name.to_lowercase()), WHITE);
                }
            } else if self.is_visible(pos) {
                if let Some(step) = next_step(self, pos, player.pos) {
                    if step != player.pos && self.is_walkable(step) {
                        self.monsters[i].pos = step;
                    }
                }
            }
        }

        if turn % REGEN_INTERVAL == 0 {
            player.regenerate();
        }
        debug!("world turn {turn} done on depth {}", self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameClass;
    use rand::{rngs::StdRng, SeedableRng};

    const ROOM: &[&str] = &[
        "##########",
        "#@.......#",
        "#........#",
        "#####.####",
        "#........#",
        "##########",
    ];

    #[test]
    fn test_ascii_layout_rejects_unknown_cells() {
        assert!(Level::from_ascii(1, &["#x#"]).is_err());
        assert!(Level::from_ascii(1, &["###", "##"]).is_err());
        assert!(Level::from_ascii(1, &[]).is_err());
    }

    #[test]
    fn test_ascii_layout_places_monsters_and_items() {
        let level = Level::from_ascii(1, &["#####", "#r!(#", "#####"]).unwrap();
        assert_eq!(level.monster_at(Position::new(1, 1)).unwrap().name, "Rat");
        let tile = level.tile_at(Position::new(2, 1)).unwrap();
        assert_eq!(tile.items[0].name, "HealthPotion");
        assert_eq!(tile.kind, TileKind::Floor);
    }

    #[test]
    fn test_bounds_queries() {
        let level = Level::from_ascii(1, ROOM).unwrap();
        assert!(level.in_bounds(Position::new(0, 0)));
        assert!(!level.in_bounds(Position::new(10, 0)));
        assert!(!level.in_bounds(Position::new(0, -1)));
        assert!(level.tile_at(Position::new(-1, 3)).is_none());
    }

    #[test]
    fn test_walls_block_sight() {
        let mut level = Level::from_ascii(1, ROOM).unwrap();
        level.update_visibility(Position::new(1, 1), 8);
        assert!(level.is_visible(Position::new(8, 2)));
        assert!(level.is_visible(Position::new(0, 0)));
        assert!(!level.is_visible(Position::new(1, 4)));
        assert!(level.tile_at(Position::new(1, 1)).unwrap().explored);
    }

    #[test]
    fn test_random_empty_tile_avoids_monsters_and_items() {
        let level = Level::from_ascii(1, &["#####", "#r.!#", "#####"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(level.random_empty_tile(&mut rng), Some(Position::new(2, 1)));
        }
    }

    #[test]
    fn test_adjacent_monster_attacks() {
        let mut level = Level::from_ascii(1, &["#####", "#.O.#", "#####"]).unwrap();
        let mut player = Player::new("Tester", GameClass::Fighter, Position::new(1, 1));
        player.hp = 1;
        let mut log = MessageLog::new();
        let mut rng = StdRng::seed_from_u64(3);
        level.advance_one_turn(1, &mut player, &mut log, &mut rng);
        assert!(player.death.is_some());
        assert_eq!(player.death.as_deref(), Some("killed by a ogre"));
        assert!(log.len() >= 1);
    }

    #[test]
    fn test_visible_monster_approaches() {
        let mut level = Level::from_ascii(1, &["#######", "#.....#", "#######"]).unwrap();
        level
            .monsters
            .push(Monster::from_name("Rat", Position::new(5, 1)).unwrap());
        let mut player = Player::new("Tester", GameClass::Fighter, Position::new(1, 1));
        level.update_visibility(player.pos, 8);
        let mut log = MessageLog::new();
        let mut rng = StdRng::seed_from_u64(3);
        level.advance_one_turn(1, &mut player, &mut log, &mut rng);
        assert_eq!(level.monsters[0].pos, Position::new(4, 1));
        assert!(log.is_empty());
    }
}
