//! # Dungeon Generation
//!
//! Procedural level layout generation using a room-and-corridor algorithm.

use crate::config::MAX_DLEVEL;
use crate::game::{Item, Level, Position, TileKind};
use crate::generation::{EncounterGenerator, GenerationConfig, Generator, ItemGenerator, Room};
use crate::{TempleError, TempleResult};
use log::debug;
use rand::{rngs::StdRng, Rng};

/// Primary dungeon generator using room-and-corridor algorithm.
///
/// This generator creates levels by:
/// 1. Placing rooms randomly with collision detection
/// 2. Connecting consecutive rooms with L-shaped corridors
/// 3. Putting the stairs (or the Troll Idol on the deepest level) in the last room
/// 4. Populating the level with monsters and items
#[derive(Debug, Clone)]
pub struct RoomCorridorGenerator {
    /// Maximum attempts to place a room before giving up
    pub max_placement_attempts: u32,
    pub encounters: EncounterGenerator,
    pub items: ItemGenerator,
}

impl Default for RoomCorridorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomCorridorGenerator {
    /// Creates a new dungeon generator with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{create_rng, GenerationConfig, Generator, RoomCorridorGenerator};
    ///
    /// let config = GenerationConfig::new(3);
    /// let generator = RoomCorridorGenerator::new();
    /// let level = generator.generate(&config, &mut create_rng(&config)).unwrap();
    /// assert_eq!(level.depth, 1);
    /// ```
    pub fn new() -> Self {
        Self {
            max_placement_attempts: 100,
            encounters: EncounterGenerator,
            items: ItemGenerator,
        }
    }

    /// Places rooms until the target count is reached or attempts run out.
    fn place_rooms(&self, config: &GenerationConfig, rng: &mut StdRng) -> Vec<Room> {
        let room_count = rng.gen_range(config.min_rooms..=config.max_rooms) as usize;
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..self.max_placement_attempts {
            if rooms.len() >= room_count {
                break;
            }
            let width = rng.gen_range(config.min_room_size..=config.max_room_size);
            let height = rng.gen_range(config.min_room_size..=config.max_room_size);
            if width >= config.width || height >= config.height {
                continue;
            }
            let x = rng.gen_range(0..=(config.width - width));
            let y = rng.gen_range(0..=(config.height - height));
            let room = Room::new(Position::new(x, y), width, height);
            if rooms.iter().all(|other| !room.overlaps(other)) {
                rooms.push(room);
            }
        }

        rooms
    }

    fn carve_room(&self, level: &mut Level, room: &Room) {
        for pos in room.floor_positions() {
            level.set_kind(pos, TileKind::Floor);
        }
    }

    /// Carves an L-shaped corridor between two points.
    fn carve_l_corridor(&self, level: &mut Level, from: Position, to: Position, rng: &mut StdRng) {
        let corner = if rng.gen_bool(0.5) {
            Position::new(to.x, from.y)
        } else {
            Position::new(from.x, to.y)
        };
        for (a, b) in [(from, corner), (corner, to)] {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                for y in a.y.min(b.y)..=a.y.max(b.y) {
                    let pos = Position::new(x, y);
                    if level.tile_at(pos).is_some_and(|t| t.kind == TileKind::Wall) {
                        level.set_kind(pos, TileKind::Floor);
                    }
                }
            }
        }
    }

    fn populate(
        &self,
        level: &mut Level,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> TempleResult<()> {
        for mut monster in self.encounters.generate(config, rng)? {
            let pos = level.random_empty_tile(rng);
            if let Some(pos) = pos.filter(|&p| Some(p) != level.player_spawn) {
                monster.pos = pos;
                level.monsters.push(monster);
            }
        }
        for item in self.items.generate(config, rng)? {
            if let Some(tile) = level
                .random_empty_tile(rng)
                .and_then(|pos| level.tile_at_mut(pos))
            {
                tile.items.push(item);
            }
        }
        Ok(())
    }
}

impl Generator<Level> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TempleResult<Level> {
        let mut level = Level::new(config.depth, config.width, config.height);
        let rooms = self.place_rooms(config, rng);
        let (first, last) = match (rooms.first(), rooms.last()) {
            (Some(first), Some(last)) if rooms.len() >= 2 => (first, last),
            _ => {
                return Err(TempleError::GenerationFailed(format!(
                    "only {} rooms fit on depth {}",
                    rooms.len(),
                    config.depth
                )))
            }
        };

        for room in &rooms {
            self.carve_room(&mut level, room);
        }
        for pair in rooms.windows(2) {
            self.carve_l_corridor(&mut level, pair[0].center(), pair[1].center(), rng);
        }

        level.player_spawn = Some(first.center());
        let goal = last.center();
        if config.depth >= MAX_DLEVEL {
            if let (Some(idol), Some(tile)) = (Item::from_name("TrollIdol"), level.tile_at_mut(goal)) {
                tile.items.push(idol);
            }
        } else {
            level.set_kind(goal, TileKind::StairsDown);
        }

        self.populate(&mut level, config, rng)?;
        self.validate(&level, config)?;
        debug!(
            "generated depth {} with {} rooms, {} monsters",
            config.depth,
            rooms.len(),
            level.monsters.len()
        );
        Ok(level)
    }

    fn validate(&self, level: &Level, config: &GenerationConfig) -> TempleResult<()> {
        let spawn = level
            .player_spawn
            .ok_or_else(|| TempleError::GenerationFailed("no spawn point".to_string()))?;
        if level.monster_at(spawn).is_some() {
            return Err(TempleError::GenerationFailed("monster on spawn point".to_string()));
        }
        let has_exit = level.positions().any(|p| {
            level.tile_at(p).is_some_and(|t| {
                t.kind == TileKind::StairsDown || t.items.iter().any(|i| i.name == "TrollIdol")
            })
        });
        if !has_exit {
            return Err(TempleError::GenerationFailed(format!(
                "depth {} has no way forward",
                config.depth
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::create_rng;
    use crate::utils::next_step;

    #[test]
    fn test_generated_levels_are_connected() {
        let generator = RoomCorridorGenerator::new();
        for seed in 0..10 {
            let config = GenerationConfig::new(seed).at_depth(3);
            let mut rng = create_rng(&config);
            let level = generator.generate(&config, &mut rng).unwrap();
            let spawn = level.player_spawn.unwrap();
            let stairs = level
                .positions()
                .find(|&p| level.tile_at(p).unwrap().kind == TileKind::StairsDown)
                .unwrap();
            // Monsters may stand in corridors, so route on a monster-free copy.
            let mut empty = level.clone();
            empty.monsters.clear();
            assert!(next_step(&empty, spawn, stairs).is_some(), "seed {seed}");
        }
    }

    #[test]
    fn test_deepest_level_holds_the_idol() {
        let generator = RoomCorridorGenerator::new();
        let config = GenerationConfig::new(5).at_depth(MAX_DLEVEL);
        let level = generator.generate(&config, &mut create_rng(&config)).unwrap();
        assert!(level
            .positions()
            .all(|p| level.tile_at(p).unwrap().kind != TileKind::StairsDown));
        assert!(level.positions().any(|p| level
            .tile_at(p)
            .unwrap()
            .items
            .iter()
            .any(|i| i.name == "TrollIdol")));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let generator = RoomCorridorGenerator::new();
        let config = GenerationConfig::for_testing(11);
        let a = generator.generate(&config, &mut create_rng(&config)).unwrap();
        let b = generator.generate(&config, &mut create_rng(&config)).unwrap();
        assert_eq!(a.player_spawn, b.player_spawn);
        assert_eq!(a.monsters, b.monsters);
    }

    #[test]
    fn test_generator_type() {
        assert_eq!(RoomCorridorGenerator::new().generator_type(), "RoomCorridorGenerator");
    }
}
