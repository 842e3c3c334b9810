//! Path validation helpers.
//!
//! The search engine never calls these; callers use them to sanity-check a
//! returned path before trusting it.

use std::collections::HashSet;

use crate::core::GridCoord;
use crate::search::is_adjacent;

/// Every consecutive pair of cells is 4-adjacent
pub fn is_contiguous(path: &[GridCoord]) -> bool {
    path.windows(2).all(|pair| is_adjacent(pair[0], pair[1]))
}

/// No cell appears twice
pub fn is_simple(path: &[GridCoord]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|cell| seen.insert(*cell))
}

/// Number of steps (moves) in a path
pub fn step_count(path: &[GridCoord]) -> usize {
    path.len().saturating_sub(1)
}
