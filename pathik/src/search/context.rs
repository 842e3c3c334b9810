//! Mutable state shared by the A* loop and DFS re-navigation.

use log::trace;

use crate::core::{CellGrid, GridCoord};
use crate::error::SearchError;
use crate::world::RobotInterface;

use super::frontier::Frontier;
use super::geometry::{direction_towards, heuristic};
use super::types::{SearchConfig, SearchStats};

/// Cost of a cell no path has reached yet
pub(super) const UNREACHED: u32 = u32::MAX;

/// One search run's bookkeeping plus the robot it drives.
///
/// The world owns the robot's physical position; everything else the two
/// searches need lives here, so A* and re-navigation always observe the
/// same tables.
pub struct SearchContext<'w, W: RobotInterface> {
    pub(super) world: &'w mut W,
    pub(super) origin: GridCoord,
    pub(super) goal: GridCoord,
    /// Cells the robot has physically stood on; never cleared
    pub(super) visited: CellGrid<bool>,
    /// g: best known cost from the origin
    pub(super) cost_from_start: CellGrid<u32>,
    /// f: g + heuristic
    pub(super) cost_estimate: CellGrid<u32>,
    pub(super) parents: CellGrid<Option<GridCoord>>,
    pub(super) frontier: Frontier,
    pub(super) stats: SearchStats,
}

impl<'w, W: RobotInterface> SearchContext<'w, W> {
    /// Initialise tables with the robot's current cell as origin
    pub fn new(world: &'w mut W, config: &SearchConfig) -> Self {
        let size = world.size();
        let origin = world.current_position();
        let goal = world.goal();

        let mut ctx = Self {
            world,
            origin,
            goal,
            visited: CellGrid::new(size, false),
            cost_from_start: CellGrid::new(size, UNREACHED),
            cost_estimate: CellGrid::new(size, UNREACHED),
            parents: CellGrid::new(size, None),
            frontier: Frontier::new(size, config.tie_break),
            stats: SearchStats::default(),
        };

        let h = heuristic(origin, goal);
        ctx.visited.set(origin, true);
        ctx.cost_from_start.set(origin, 0);
        ctx.cost_estimate.set(origin, h);
        ctx.frontier.push(origin, h);
        ctx
    }

    /// Where the robot physically is
    #[inline]
    pub fn position(&self) -> GridCoord {
        self.world.current_position()
    }

    /// Has the robot ever stood on `coord`?
    #[inline]
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.visited.value(coord)
    }

    /// Best known g, `None` while unreached
    pub fn cost_from_start(&self, coord: GridCoord) -> Option<u32> {
        self.cost_from_start
            .get(coord)
            .copied()
            .filter(|g| *g != UNREACHED)
    }

    /// Current f, `None` while unreached
    pub fn cost_estimate(&self, coord: GridCoord) -> Option<u32> {
        self.cost_estimate
            .get(coord)
            .copied()
            .filter(|f| *f != UNREACHED)
    }

    /// Cell `coord` was reached from on its best known path
    pub fn parent(&self, coord: GridCoord) -> Option<GridCoord> {
        self.parents.value(coord)
    }

    /// Counters so far
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Physically step onto an adjacent cell (no-op when already there),
    /// recording it in visited memory.
    pub(super) fn step_to(&mut self, to: GridCoord) -> Result<(), SearchError> {
        let from = self.position();
        let Some(direction) = direction_towards(from, to) else {
            return Ok(());
        };

        self.world
            .move_one_step(direction)
            .map_err(|source| SearchError::MoveRejected { from, to, source })?;

        let now = self.position();
        self.visited.set(now, true);
        self.stats.steps_taken += 1;
        Ok(())
    }

    /// Offer `from -> neighbor` with unit cost; returns true if g improved
    pub(super) fn relax(&mut self, from: GridCoord, neighbor: GridCoord) -> bool {
        let candidate = self.cost_from_start.value(from).saturating_add(1);
        if candidate >= self.cost_from_start.value(neighbor) {
            return false;
        }

        let f = candidate + heuristic(neighbor, self.goal);
        trace!(
            "[AStar] relax {} via {}: g={} f={}",
            neighbor, from, candidate, f
        );
        self.parents.set(neighbor, Some(from));
        self.cost_from_start.set(neighbor, candidate);
        self.cost_estimate.set(neighbor, f);
        self.frontier.push(neighbor, f);
        true
    }

    /// Follow parent links from `end` back to the origin.
    ///
    /// The walk is bounded by the number of cells; a missing link or a
    /// cycle means the parent table is corrupt.
    pub(super) fn reconstruct_path(&self, end: GridCoord) -> Result<Vec<GridCoord>, SearchError> {
        let max_len = self.visited.size() * self.visited.size();
        let mut path = vec![end];
        let mut current = end;

        while current != self.origin {
            let prev = self
                .parent(current)
                .ok_or(SearchError::CorruptParentChain { at: current })?;
            if path.len() >= max_len {
                return Err(SearchError::CorruptParentChain { at: current });
            }
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Ok(path)
    }
}
