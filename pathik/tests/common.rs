//! Test utilities for Pathik integration tests.
//!
//! Ground truth here comes from a plain breadth-first search over the full
//! map, which the robot never gets to see.

#![allow(dead_code)]

use std::collections::VecDeque;

use pathik::core::CellGrid;
use pathik::{GridCoord, GridWorld, MapGenerator};

/// Shortest origin-to-goal step count with full map knowledge
pub fn bfs_distance(world: &GridWorld) -> Option<u32> {
    let size = world.size_cells();
    let goal = GridCoord::new(size - 1, size - 1);
    let mut dist: CellGrid<Option<u32>> = CellGrid::new(size, None);
    let mut queue = VecDeque::new();

    dist.set(GridCoord::ORIGIN, Some(0));
    queue.push_back(GridCoord::ORIGIN);

    while let Some(cell) = queue.pop_front() {
        let d = dist.value(cell)?;
        if cell == goal {
            return Some(d);
        }
        for next in cell.neighbors_4(size) {
            if world.is_free(next) && dist.value(next).is_none() {
                dist.set(next, Some(d + 1));
                queue.push_back(next);
            }
        }
    }
    None
}

/// Seeded random world
pub fn random_world(size: usize, density: f64, seed: u64) -> GridWorld {
    MapGenerator::generate(size, density, seed).expect("valid generator parameters")
}

/// Cells from `(row, col)` pairs
pub fn coords(raw: &[(usize, usize)]) -> Vec<GridCoord> {
    raw.iter().map(|&(r, c)| GridCoord::new(r, c)).collect()
}
