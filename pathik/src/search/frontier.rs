//! Frontier priority queue.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{CellGrid, GridCoord};

/// How frontier entries with equal f are ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Most recently queued first (keeps the robot pushing forward)
    #[default]
    Newest,
    /// First queued first
    Oldest,
    /// Smallest (row, col) first
    Lexicographic,
}

/// A queued cell with its f at insertion time
#[derive(Clone, Debug)]
struct FrontierEntry {
    coord: GridCoord,
    f_cost: u32,
    /// Secondary key, smaller wins
    tie: u64,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.tie.cmp(&self.tie))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cells discovered but not yet expanded, cheapest f first.
///
/// A cell is logically queued at most once. Re-queuing a cell with a
/// better f pushes a fresh heap entry; the old one is dropped when popped.
#[derive(Clone, Debug)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    queued: CellGrid<Option<u32>>,
    tie_break: TieBreak,
    inserted: u64,
    len: usize,
}

impl Frontier {
    /// Empty frontier for a `size`×`size` grid
    pub fn new(size: usize, tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: CellGrid::new(size, None),
            tie_break,
            inserted: 0,
            len: 0,
        }
    }

    /// Queue `coord` with total estimate `f_cost`, or lower the estimate of
    /// an already queued cell. A higher estimate for a queued cell is ignored.
    pub fn push(&mut self, coord: GridCoord, f_cost: u32) {
        match self.queued.value(coord) {
            Some(current) if current <= f_cost => return,
            Some(_) => {}
            None => self.len += 1,
        }

        let seq = self.inserted;
        self.inserted += 1;
        let tie = match self.tie_break {
            TieBreak::Newest => u64::MAX - seq,
            TieBreak::Oldest => seq,
            TieBreak::Lexicographic => {
                (coord.row as u64) * (self.queued.size() as u64) + coord.col as u64
            }
        };

        self.queued.set(coord, Some(f_cost));
        self.heap.push(FrontierEntry { coord, f_cost, tie });
    }

    /// Remove and return the queued cell with the smallest f
    pub fn pop(&mut self) -> Option<(GridCoord, u32)> {
        while let Some(entry) = self.heap.pop() {
            // Skip entries superseded by a cheaper re-queue or already popped
            if self.queued.value(entry.coord) != Some(entry.f_cost) {
                continue;
            }
            self.queued.set(entry.coord, None);
            self.len -= 1;
            return Some((entry.coord, entry.f_cost));
        }
        None
    }

    /// Is `coord` currently queued?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.queued.value(coord).is_some()
    }

    /// Number of logically queued cells
    pub fn len(&self) -> usize {
        self.len
    }

    /// No cells queued?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<GridCoord> {
        std::iter::from_fn(|| frontier.pop().map(|(c, _)| c)).collect()
    }

    #[test]
    fn test_min_f_first() {
        let mut frontier = Frontier::new(4, TieBreak::Newest);
        frontier.push(GridCoord::new(0, 1), 7);
        frontier.push(GridCoord::new(1, 0), 5);
        frontier.push(GridCoord::new(2, 2), 6);

        assert_eq!(frontier.pop(), Some((GridCoord::new(1, 0), 5)));
        assert_eq!(frontier.pop(), Some((GridCoord::new(2, 2), 6)));
        assert_eq!(frontier.pop(), Some((GridCoord::new(0, 1), 7)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_tie_breaks() {
        let cells = [GridCoord::new(1, 0), GridCoord::new(0, 2), GridCoord::new(0, 1)];

        let mut newest = Frontier::new(3, TieBreak::Newest);
        let mut oldest = Frontier::new(3, TieBreak::Oldest);
        let mut lex = Frontier::new(3, TieBreak::Lexicographic);
        for c in cells {
            newest.push(c, 4);
            oldest.push(c, 4);
            lex.push(c, 4);
        }

        assert_eq!(drain(&mut newest), vec![cells[2], cells[1], cells[0]]);
        assert_eq!(drain(&mut oldest), cells.to_vec());
        assert_eq!(
            drain(&mut lex),
            vec![GridCoord::new(0, 1), GridCoord::new(0, 2), GridCoord::new(1, 0)]
        );
    }

    #[test]
    fn test_requeue_with_lower_f_drops_stale_entry() {
        let mut frontier = Frontier::new(3, TieBreak::Oldest);
        let a = GridCoord::new(0, 1);
        let b = GridCoord::new(1, 0);
        frontier.push(a, 9);
        frontier.push(b, 6);
        frontier.push(a, 5);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((a, 5)));
        assert_eq!(frontier.pop(), Some((b, 6)));
        // The stale (a, 9) entry is never returned
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_higher_f_for_queued_cell_ignored() {
        let mut frontier = Frontier::new(3, TieBreak::Newest);
        let a = GridCoord::new(2, 2);
        frontier.push(a, 3);
        frontier.push(a, 8);
        assert!(frontier.contains(a));
        assert_eq!(frontier.pop(), Some((a, 3)));
        assert!(!frontier.contains(a));
        assert_eq!(frontier.pop(), None);
    }
}
