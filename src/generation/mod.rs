//! # Generation Module
//!
//! Procedural content generation for dungeon levels, their monsters and
//! their items.
//!
//! Every generator implements [`Generator`], so the session can load the
//! next level without knowing whether it is carved procedurally or read from
//! a hand-drawn layout.

pub mod dungeon;
pub mod encounters;
pub mod fixed;
pub mod loot;

pub use dungeon::*;
pub use encounters::*;
pub use fixed::*;
pub use loot::*;

use crate::config::{MAP_H, MAP_W};
use crate::game::Position;
use crate::TempleResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls room sizes, room counts and population density. `depth` is set
/// by the session before each level is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Depth of the level being generated, starting at 1
    pub depth: u32,
    /// Level width in tiles
    pub width: i32,
    /// Level height in tiles
    pub height: i32,
    /// Minimum room size, walls included
    pub min_room_size: i32,
    /// Maximum room size, walls included
    pub max_room_size: i32,
    /// Minimum number of rooms per level
    pub min_rooms: u32,
    /// Maximum number of rooms per level
    pub max_rooms: u32,
    /// Monsters on the first level; deeper levels get more
    pub monsters_per_level: u32,
    /// Items on every level before random extras
    pub items_per_level: u32,
}

impl GenerationConfig {
    /// Creates a default generation configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert!(config.min_room_size >= 4);
    /// assert!(config.max_room_size >= config.min_room_size);
    /// assert_eq!(config.depth, 1);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            depth: 1,
            width: MAP_W,
            height: MAP_H,
            min_room_size: 5,
            max_room_size: 11,
            min_rooms: 5,
            max_rooms: 9,
            monsters_per_level: 3,
            items_per_level: 3,
        }
    }

    /// Creates a configuration for testing with smaller, simpler levels.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            depth: 1,
            width: 30,
            height: 20,
            min_room_size: 4,
            max_room_size: 7,
            min_rooms: 2,
            max_rooms: 4,
            monsters_per_level: 1,
            items_per_level: 1,
        }
    }

    /// Copy of the configuration aimed at another depth.
    pub fn at_depth(&self, depth: u32) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// A rectangular room, walls included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Top-left corner of the room
    pub top_left: Position,
    /// Width of the room (including walls)
    pub width: i32,
    /// Height of the room (including walls)
    pub height: i32,
}

impl Room {
    /// Creates a new room.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{Room, Position};
    ///
    /// let room = Room::new(Position::new(5, 5), 10, 8);
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// assert!(room.contains(Position::new(7, 7)));
    /// assert!(!room.contains(Position::new(20, 20)));
    /// ```
    pub fn new(top_left: Position, width: i32, height: i32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Gets the center position of the room.
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x + self.width / 2,
            self.top_left.y + self.height / 2,
        )
    }

    /// Checks if a position is inside this room.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.top_left.x
            && pos.y >= self.top_left.y
            && pos.x < self.top_left.x + self.width
            && pos.y < self.top_left.y + self.height
    }

    /// Checks if this room overlaps with another room.
    pub fn overlaps(&self, other: &Room) -> bool {
        !(self.top_left.x >= other.top_left.x + other.width
            || other.top_left.x >= self.top_left.x + self.width
            || self.top_left.y >= other.top_left.y + other.height
            || other.top_left.y >= self.top_left.y + self.height)
    }

    /// Gets all floor positions within this room.
    pub fn floor_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();

        for y in (self.top_left.y + 1)..(self.top_left.y + self.height - 1) {
            for x in (self.top_left.x + 1)..(self.top_left.x + self.width - 1) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }
}

/// Trait for procedural generators.
///
/// All generation systems implement this trait, so levels and their
/// population share one interface.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TempleResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> TempleResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Creates a seeded random number generator from the config.
pub fn create_rng(config: &GenerationConfig) -> StdRng {
    StdRng::seed_from_u64(config.seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_overlap() {
        let a = Room::new(Position::new(0, 0), 5, 5);
        let b = Room::new(Position::new(4, 4), 5, 5);
        let c = Room::new(Position::new(5, 0), 5, 5);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_floor_positions_exclude_walls() {
        let room = Room::new(Position::new(2, 2), 4, 5);
        let floor = room.floor_positions();
        assert_eq!(floor.len(), 2 * 3);
        assert!(floor.iter().all(|p| room.contains(*p)));
        assert!(!floor.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_at_depth_keeps_seed() {
        let config = GenerationConfig::new(99).at_depth(4);
        assert_eq!(config.seed, 99);
        assert_eq!(config.depth, 4);
    }
}
