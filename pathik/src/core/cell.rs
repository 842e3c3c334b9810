//! Cell types for the world grid.

use serde::{Deserialize, Serialize};

/// What occupies a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// The robot can stand here
    #[default]
    Free = 0,

    /// Obstacle; never entered and never reported by sensing
    Blocked = 1,
}

impl CellType {
    /// Can the robot traverse this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellType::Free)
    }

    /// Parse a layout character (`.` free, `#` blocked)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellType::Free),
            '#' => Some(CellType::Blocked),
            _ => None,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellType::Free => '.',
            CellType::Blocked => '#',
        }
    }
}
