//! # Grid Mathematics
//!
//! Line rasterization used for line-of-sight checks.

use crate::game::Position;

/// Cells on the Bresenham line from `from` to `to`, both endpoints included.
///
/// # Examples
///
/// ```
/// use troll_temple::{utils::line, Position};
///
/// let cells = line(Position::new(0, 0), Position::new(3, 1));
/// assert_eq!(cells.first(), Some(&Position::new(0, 0)));
/// assert_eq!(cells.last(), Some(&Position::new(3, 1)));
/// assert_eq!(cells.len(), 4);
/// ```
pub fn line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cur = from;
    let mut cells = vec![cur];

    while cur != to {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cur.x += sx;
        }
        if e2 <= dx {
            err += dx;
            cur.y += sy;
        }
        cells.push(cur);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_line() {
        let p = Position::new(4, 4);
        assert_eq!(line(p, p), vec![p]);
    }

    #[test]
    fn test_lines_are_contiguous() {
        let from = Position::new(2, 7);
        for to in [Position::new(9, 1), Position::new(-3, 5), Position::new(2, -4)] {
            let cells = line(from, to);
            assert_eq!(*cells.last().unwrap(), to);
            for pair in cells.windows(2) {
                assert_eq!(pair[0].chebyshev_distance(pair[1]), 1);
            }
        }
    }
}
