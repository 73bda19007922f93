//! # Utilities Module
//!
//! Grid geometry and pathfinding helpers shared by levels and monsters.

pub mod math;
pub mod pathfinding;

pub use self::math::*;
pub use self::pathfinding::*;
