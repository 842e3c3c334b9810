//! Dense per-cell tables.

use super::GridCoord;

/// Row-major `size`×`size` table with one value per cell.
///
/// Every per-run table of the search (visited memory, costs, parent links,
/// visitation marks) is one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> CellGrid<T> {
    /// Create a table with every cell set to `value`
    pub fn new(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> CellGrid<T> {
    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is the coordinate inside the table?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.size + coord.col)
    }

    /// Value at `coord`, `None` when out of bounds
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<&T> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Set the value at `coord`; out-of-bounds writes are ignored and reported as `false`
    #[inline]
    pub fn set(&mut self, coord: GridCoord, value: T) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate `(coord, value)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (GridCoord::new(i / size, i % size), v))
    }
}

impl<T: Copy + Default> CellGrid<T> {
    /// Copy of the value at `coord`, default when out of bounds
    #[inline]
    pub fn value(&self, coord: GridCoord) -> T {
        self.get(coord).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut grid = CellGrid::new(3, 0u32);
        assert!(grid.set(GridCoord::new(2, 1), 7));
        assert_eq!(grid.get(GridCoord::new(2, 1)), Some(&7));
        assert_eq!(grid.value(GridCoord::new(0, 0)), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = CellGrid::new(2, false);
        assert!(!grid.set(GridCoord::new(2, 0), true));
        assert_eq!(grid.get(GridCoord::new(0, 2)), None);
        assert!(!grid.value(GridCoord::new(5, 5)));
    }

    #[test]
    fn test_iter_row_major() {
        let mut grid = CellGrid::new(2, 0u8);
        grid.set(GridCoord::new(1, 0), 3);
        let coords: Vec<_> = grid.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(coords[2], (GridCoord::new(1, 0), 3));
        assert_eq!(coords.len(), 4);

        grid.fill(9);
        assert!(grid.iter().all(|(_, v)| *v == 9));
    }
}
