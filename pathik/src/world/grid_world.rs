//! Simulated N×N grid world.

use log::trace;

use crate::core::{CellGrid, CellType, Direction, GridCoord};
use crate::error::{MoveError, PathikError, Result};

use super::interface::RobotInterface;
use super::path::is_contiguous;

/// Square grid of free and blocked cells with a single robot in it.
///
/// The robot starts on the origin (0, 0). The world holds the full map,
/// but only exposes what a robot standing on its current cell could sense
/// through [`RobotInterface`].
#[derive(Clone, Debug)]
pub struct GridWorld {
    cells: CellGrid<CellType>,
    position: GridCoord,
    moves: usize,
}

impl GridWorld {
    /// Create a world with every cell free
    pub fn open(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PathikError::InvalidWorld(
                "grid size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            cells: CellGrid::new(size, CellType::Free),
            position: GridCoord::ORIGIN,
            moves: 0,
        })
    }

    /// Parse a layout of `.` (free) and `#` (blocked) rows.
    ///
    /// ```
    /// use pathik::world::GridWorld;
    ///
    /// let world = GridWorld::from_rows(&[
    ///     "..#",
    ///     "#..",
    ///     "#..",
    /// ]).unwrap();
    /// assert_eq!(world.size_cells(), 3);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut world = Self::open(size)?;

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return Err(PathikError::InvalidWorld(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    chars.len(),
                    size
                )));
            }
            for (col, c) in chars.into_iter().enumerate() {
                let cell = CellType::from_char(c).ok_or_else(|| {
                    PathikError::InvalidWorld(format!(
                        "unknown cell '{}' at ({}, {})",
                        c, row, col
                    ))
                })?;
                world.cells.set(GridCoord::new(row, col), cell);
            }
        }

        if !world.is_free(GridCoord::ORIGIN) {
            return Err(PathikError::InvalidWorld(
                "the robot's starting cell (0, 0) is blocked".to_string(),
            ));
        }
        Ok(world)
    }

    /// Side length N
    #[inline]
    pub fn size_cells(&self) -> usize {
        self.cells.size()
    }

    /// Cell type at `coord`, `None` when out of bounds
    #[inline]
    pub fn cell(&self, coord: GridCoord) -> Option<CellType> {
        self.cells.get(coord).copied()
    }

    /// Is `coord` inside the grid and traversable?
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.cell(coord).is_some_and(CellType::is_traversable)
    }

    /// Overwrite a cell; returns false when out of bounds
    pub fn set_cell(&mut self, coord: GridCoord, cell: CellType) -> bool {
        self.cells.set(coord, cell)
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_traversable())
            .count()
    }

    /// Physical moves performed since creation or the last reset
    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Put the robot back on the origin and clear the move counter
    pub fn reset_agent(&mut self) {
        self.position = GridCoord::ORIGIN;
        self.moves = 0;
    }

    /// Check a path the way a caller should before trusting it.
    ///
    /// The path must be non-empty, start at the origin, end at the goal,
    /// cross only free cells, and be contiguous.
    pub fn check_path(&self, path: &[GridCoord]) -> bool {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return false;
        };
        *first == GridCoord::ORIGIN
            && *last == self.goal()
            && path.iter().all(|c| self.is_free(*c))
            && is_contiguous(path)
    }

    /// Draw the grid, optionally overlaying a path.
    ///
    /// Free cells are `.`, blocked cells `#`, path cells `*`, with `S` and
    /// `G` marking the path's ends.
    pub fn render(&self, path: Option<&[GridCoord]>) -> String {
        let size = self.size_cells();
        let mut canvas: Vec<Vec<char>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.cells.value(GridCoord::new(row, col)).as_char())
                    .collect()
            })
            .collect();

        if let Some(path) = path {
            let mut mark = |cell: &GridCoord, ch: char| {
                if let Some(c) = canvas.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
                    *c = ch;
                }
            };
            for cell in path {
                mark(cell, '*');
            }
            if let Some(first) = path.first() {
                mark(first, 'S');
            }
            if let Some(last) = path.last() {
                mark(last, 'G');
            }
        }

        let mut out = String::with_capacity(size * (size + 1));
        for line in canvas {
            out.extend(line);
            out.push('\n');
        }
        out
    }
}

impl RobotInterface for GridWorld {
    fn size(&self) -> usize {
        self.size_cells()
    }

    fn current_position(&self) -> GridCoord {
        self.position
    }

    fn adjacent_free_cells(&self) -> Vec<GridCoord> {
        self.position
            .neighbors_4(self.size_cells())
            .filter(|c| self.is_free(*c))
            .collect()
    }

    fn move_one_step(&mut self, direction: Direction) -> std::result::Result<GridCoord, MoveError> {
        let from = self.position;
        let to = from
            .step(direction, self.size_cells())
            .ok_or(MoveError::OutOfBounds { from, direction })?;
        if !self.is_free(to) {
            return Err(MoveError::Blocked(to));
        }

        trace!("[World] move {} {} -> {}", direction, from, to);
        self.position = to;
        self.moves += 1;
        Ok(to)
    }
}
