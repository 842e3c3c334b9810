//! Embodied A* search.

use log::{debug, trace, warn};

use crate::core::GridCoord;
use crate::error::SearchError;
use crate::world::RobotInterface;

use super::context::SearchContext;
use super::geometry::is_adjacent;
use super::renavigate::Renavigator;
use super::types::{Expansion, PathResult, SearchConfig};

/// A* search driven by a robot that can only sense its neighbours.
///
/// Every frontier cell is expanded from where the robot physically stands:
/// the robot steps onto it directly when adjacent, or re-navigates through
/// visited cells otherwise, then senses and relaxes its live neighbours.
pub struct AgentSearch<'w, W: RobotInterface> {
    ctx: SearchContext<'w, W>,
    expansions: Vec<Expansion>,
}

impl<'w, W: RobotInterface> AgentSearch<'w, W> {
    /// Create a search from the robot's current cell to the world's goal
    pub fn new(world: &'w mut W, config: SearchConfig) -> Self {
        Self {
            ctx: SearchContext::new(world, &config),
            expansions: Vec::new(),
        }
    }

    /// Create with default configuration
    pub fn with_defaults(world: &'w mut W) -> Self {
        Self::new(world, SearchConfig::default())
    }

    /// Shared bookkeeping, for inspection after a run
    pub fn context(&self) -> &SearchContext<'w, W> {
        &self.ctx
    }

    /// Run until the robot stands on the goal or the frontier is empty.
    ///
    /// Finding no path is reported through [`PathResult::success`]; errors
    /// are reserved for broken invariants.
    pub fn run(&mut self) -> Result<PathResult, SearchError> {
        trace!(
            "[AStar] run: origin={} goal={}",
            self.ctx.origin,
            self.ctx.goal
        );

        while let Some((next, f_cost)) = self.ctx.frontier.pop() {
            self.ctx.stats.nodes_expanded += 1;
            trace!("[AStar] pop {} f={}", next, f_cost);

            if !self.relocate(next)? {
                warn!(
                    "[AStar] could not re-navigate from {} to {}, skipping it",
                    self.ctx.position(),
                    next
                );
                self.ctx.stats.failed_renavigations += 1;
                continue;
            }

            let g = self.ctx.cost_from_start.value(next);
            self.expansions.push(Expansion {
                cell: next,
                cost_from_start: g,
            });

            if self.ctx.world.is_at_goal() {
                return self.finish(next, g);
            }

            for neighbor in self.ctx.world.adjacent_free_cells() {
                self.ctx.relax(next, neighbor);
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes, {} steps walked",
            self.ctx.stats.nodes_expanded, self.ctx.stats.steps_taken
        );
        Ok(PathResult::no_path(
            self.ctx.stats.clone(),
            std::mem::take(&mut self.expansions),
        ))
    }

    /// Bring the robot onto `target`; false if re-navigation could not reach it
    fn relocate(&mut self, target: GridCoord) -> Result<bool, SearchError> {
        let here = self.ctx.position();
        if here == target {
            return Ok(true);
        }
        if is_adjacent(here, target) {
            self.ctx.step_to(target)?;
            return Ok(true);
        }

        self.ctx.stats.renavigations += 1;
        debug!("[AStar] {} not adjacent to {}, re-navigating", target, here);
        Renavigator::new(&mut self.ctx, target)?.run()
    }

    fn finish(&mut self, goal: GridCoord, cost: u32) -> Result<PathResult, SearchError> {
        let path = self.ctx.reconstruct_path(goal)?;

        debug!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}, steps={}, renavigations={}",
            path.len(),
            cost,
            self.ctx.stats.nodes_expanded,
            self.ctx.stats.steps_taken,
            self.ctx.stats.renavigations
        );

        Ok(PathResult {
            path,
            cost,
            success: true,
            stats: self.ctx.stats.clone(),
            expansions: std::mem::take(&mut self.expansions),
        })
    }
}

/// Quick search with default configuration
pub fn find_path<W: RobotInterface>(world: &mut W) -> Result<PathResult, SearchError> {
    AgentSearch::with_defaults(world).run()
}
