//! Grid coordinate and direction types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinates (integer cell indices)
///
/// Rows grow southward and columns grow eastward, so the origin (0, 0) is
/// the north-west corner and the goal of an N×N run is (N-1, N-1).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// Row index (southward)
    pub row: usize,
    /// Column index (eastward)
    pub col: usize,
}

impl GridCoord {
    /// The north-west corner where every run starts
    pub const ORIGIN: GridCoord = GridCoord { row: 0, col: 0 };

    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Neighbor one step in `direction`, if it stays inside an `size`×`size` grid
    #[inline]
    pub fn step(&self, direction: Direction, size: usize) -> Option<GridCoord> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(GridCoord::new(row, col))
    }

    /// In-bounds 4-connected neighbors, in [`Direction::ALL`] order
    pub fn neighbors_4(&self, size: usize) -> impl Iterator<Item = GridCoord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, size))
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards row N-1
    South,
    /// Towards column N-1
    East,
    /// Towards column 0
    West,
}

impl Direction {
    /// All directions in sensing order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row and column delta of one step
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The direction that undoes this one
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        let corner = GridCoord::ORIGIN;
        assert_eq!(corner.step(Direction::North, 3), None);
        assert_eq!(corner.step(Direction::West, 3), None);
        assert_eq!(corner.step(Direction::South, 3), Some(GridCoord::new(1, 0)));
        assert_eq!(corner.step(Direction::East, 3), Some(GridCoord::new(0, 1)));

        let far = GridCoord::new(2, 2);
        assert_eq!(far.step(Direction::South, 3), None);
        assert_eq!(far.step(Direction::East, 3), None);
    }

    #[test]
    fn test_neighbors_4_order() {
        let center = GridCoord::new(1, 1);
        let neighbors: Vec<_> = center.neighbors_4(3).collect();
        assert_eq!(
            neighbors,
            vec![
                GridCoord::new(0, 1),
                GridCoord::new(2, 1),
                GridCoord::new(1, 2),
                GridCoord::new(1, 0),
            ]
        );
        assert_eq!(GridCoord::ORIGIN.neighbors_4(3).count(), 2);
    }

    #[test]
    fn test_opposite_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GridCoord::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Direction::South.to_string(), "SOUTH");
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(0, 4);
        let b = GridCoord::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
    }
}
