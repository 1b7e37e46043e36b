//! Grid coordinates and the 8 neighbor directions
//!
//! Coordinates use a Y-down system: the top neighbor of `(x, y)` is `(x, y - 1)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell address on the tile plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`, or `None` past the edge of the `i32` plane
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Neighbors in bit order (see [`Direction::ALL`])
    ///
    /// Directions that would leave the `i32` plane are skipped, so those
    /// cells read as empty.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Coordinate)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.offset(d).map(|n| (d, n)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the 8 neighbor directions around a cell
///
/// The discriminant is the bit position used when packing a neighbor mask:
/// ```text
///  TL(0)  T(1)  TR(2)
///   L(3)   *    R(4)
///  BL(5)  B(6)  BR(7)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Left = 3,
    Right = 4,
    BottomLeft = 5,
    Bottom = 6,
    BottomRight = 7,
}

impl Direction {
    /// All directions in bit order
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// The four edge-sharing directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The four corner directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// Cell offset `(dx, dy)` for this direction (Y-down)
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::BottomLeft => (-1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomRight => (1, 1),
        }
    }

    /// Bit position in a neighbor mask
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Single-bit mask for this direction
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::TopLeft => Direction::BottomRight,
            Direction::Top => Direction::Bottom,
            Direction::TopRight => Direction::BottomLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::BottomLeft => Direction::TopRight,
            Direction::Bottom => Direction::Top,
            Direction::BottomRight => Direction::TopLeft,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopLeft
                | Direction::TopRight
                | Direction::BottomLeft
                | Direction::BottomRight
        )
    }

    /// The two edge directions that flank a corner direction
    ///
    /// Returns `None` for orthogonal directions.
    pub const fn orthogonal_pair(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::TopLeft => Some((Direction::Top, Direction::Left)),
            Direction::TopRight => Some((Direction::Top, Direction::Right)),
            Direction::BottomLeft => Some((Direction::Bottom, Direction::Left)),
            Direction::BottomRight => Some((Direction::Bottom, Direction::Right)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_declaration_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i as u32);
            assert_eq!(dir.bit(), 1u8 << i);
        }
    }

    #[test]
    fn test_y_down_offsets() {
        let c = Coordinate::new(5, 5);
        assert_eq!(c.offset(Direction::Top), Some(Coordinate::new(5, 4)));
        assert_eq!(c.offset(Direction::BottomRight), Some(Coordinate::new(6, 6)));
        assert_eq!(c.offset(Direction::Left), Some(Coordinate::new(4, 5)));
    }

    #[test]
    fn test_opposite_round_trips_offset() {
        let origin = Coordinate::new(0, 0);
        for dir in Direction::ALL {
            let back = origin.offset(dir).and_then(|n| n.offset(dir.opposite()));
            assert_eq!(back, Some(origin));
            assert_eq!(dir.is_diagonal(), dir.opposite().is_diagonal());
        }
    }

    #[test]
    fn test_neighbors_stop_at_plane_edge() {
        let corner = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset(Direction::Right), None);
        assert_eq!(corner.offset(Direction::Top), None);
        assert_eq!(
            corner.offset(Direction::BottomLeft),
            Some(Coordinate::new(i32::MAX - 1, i32::MIN + 1))
        );

        let dirs: Vec<Direction> = corner.neighbors().map(|(d, _)| d).collect();
        assert_eq!(
            dirs,
            vec![Direction::Left, Direction::BottomLeft, Direction::Bottom]
        );
        assert_eq!(Coordinate::new(0, 0).neighbors().count(), 8);
    }

    #[test]
    fn test_orthogonal_pair_only_for_corners() {
        for dir in Direction::ORTHOGONAL {
            assert!(dir.orthogonal_pair().is_none());
        }
        assert_eq!(
            Direction::TopRight.orthogonal_pair(),
            Some((Direction::Top, Direction::Right))
        );
    }
}
