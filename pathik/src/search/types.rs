//! Search configuration and result types.

use crate::core::GridCoord;

use super::frontier::TieBreak;

/// Search configuration
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Ordering of frontier entries with equal f
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Create with a specific tie-break
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

/// Counters collected during one run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier cells popped and processed
    pub nodes_expanded: usize,
    /// Physical moves made by the robot, re-navigation included
    pub steps_taken: usize,
    /// DFS re-navigations started
    pub renavigations: usize,
    /// Physical moves made inside re-navigations
    pub renavigation_steps: usize,
    /// Re-navigations that could not reach their target
    pub failed_renavigations: usize,
}

/// A frontier cell at the moment it was expanded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expansion {
    /// The expanded cell
    pub cell: GridCoord,
    /// Its cost from start when popped
    pub cost_from_start: u32,
}

/// Result of a search run
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Cells from origin to goal inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Number of steps along the path
    pub cost: u32,
    /// Whether a path was found
    pub success: bool,
    /// Counters
    pub stats: SearchStats,
    /// Every expansion in pop order
    pub expansions: Vec<Expansion>,
}

impl PathResult {
    /// Frontier exhausted without reaching the goal
    pub(super) fn no_path(stats: SearchStats, expansions: Vec<Expansion>) -> Self {
        Self {
            path: Vec::new(),
            cost: u32::MAX,
            success: false,
            stats,
            expansions,
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}
