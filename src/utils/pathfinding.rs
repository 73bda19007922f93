//! # Pathfinding Algorithms
//!
//! Monster navigation on top of the `pathfinding` crate's A*.

use crate::game::{Level, Position};
use ::pathfinding::prelude::astar;

/// First step of a shortest path from `from` towards `goal`.
///
/// Monsters block the path except at the goal itself. Returns `None` when the
/// goal is unreachable or already reached.
pub fn next_step(level: &Level, from: Position, goal: Position) -> Option<Position> {
    let (path, _cost) = astar(
        &from,
        |&p| {
            p.adjacent_positions()
                .into_iter()
                .filter(|&n| n == goal || level.is_walkable(n))
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |&p| p.chebyshev_distance(goal),
        |&p| p == goal,
    )?;
    path.get(1).copied()
}
