//! Heuristic and adjacency helpers.

use crate::core::{Direction, GridCoord};

/// Remaining-distance estimate from `cell` to `goal`.
///
/// Equals the Manhattan distance as long as `cell` lies north-west of
/// `goal`, which holds for every cell when the goal is the grid's
/// south-east corner. Saturates to 0 otherwise.
#[inline]
pub fn heuristic(cell: GridCoord, goal: GridCoord) -> u32 {
    let rows = goal.row.saturating_sub(cell.row);
    let cols = goal.col.saturating_sub(cell.col);
    (rows + cols) as u32
}

/// True iff `a` and `b` differ by one in exactly one axis
#[inline]
pub fn is_adjacent(a: GridCoord, b: GridCoord) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

/// The single cardinal step from `from` towards `to`.
///
/// `None` when the cells are identical. Only defined for adjacent or
/// identical cells; for anything else the row difference wins.
pub fn direction_towards(from: GridCoord, to: GridCoord) -> Option<Direction> {
    debug_assert!(
        from == to || is_adjacent(from, to),
        "direction_towards called with non-adjacent cells {} -> {}",
        from,
        to
    );

    if to.row < from.row {
        Some(Direction::North)
    } else if to.row > from.row {
        Some(Direction::South)
    } else if to.col < from.col {
        Some(Direction::West)
    } else if to.col > from.col {
        Some(Direction::East)
    } else {
        None
    }
}

/// Sort candidate cells so that southern then eastern cells come first.
///
/// Strict total order: descending row, then descending column.
pub fn order_for_exploration(cells: &mut [GridCoord]) {
    cells.sort_unstable_by(|a, b| b.row.cmp(&a.row).then(b.col.cmp(&a.col)));
}
