//! Depth-first re-navigation through visited territory.
//!
//! When the frontier's next cell is not adjacent to the robot, the robot has
//! to walk there. It only trusts cells it has already stood on, so the walk
//! is a depth-first traversal of visited memory, driven by live sensing at
//! every cell it reaches, that is allowed to step onto the target itself.
//!
//! The traversal uses an explicit stack of frames, each holding the cell,
//! its remaining ordered candidates, and where to step back to once the
//! cell is exhausted. A `finished` flag checked at the top of every
//! iteration stops all further work once the target is reached.

use log::{debug, trace};

use crate::core::{CellGrid, GridCoord};
use crate::error::SearchError;
use crate::world::RobotInterface;

use super::context::SearchContext;
use super::geometry::{is_adjacent, order_for_exploration};

/// Per-invocation DFS colouring, separate from visited memory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisitationMark {
    /// Not touched by this traversal
    #[default]
    Unseen,
    /// On the current branch
    InProgress,
    /// Fully explored
    Done,
}

/// One cell on the traversal stack
#[derive(Debug)]
struct Frame {
    cell: GridCoord,
    /// Ordered candidates still to try, next one last
    candidates: Vec<GridCoord>,
    /// Cell to step back to when this frame is exhausted (None for the root)
    return_to: Option<GridCoord>,
}

/// DFS walker for a single re-navigation call
pub struct Renavigator<'c, 'w, W: RobotInterface> {
    ctx: &'c mut SearchContext<'w, W>,
    target: GridCoord,
    marks: CellGrid<VisitationMark>,
    finished: bool,
}

impl<'c, 'w, W: RobotInterface> Renavigator<'c, 'w, W> {
    /// Prepare a walk to `target` with fresh marks.
    ///
    /// The target must have been sensed from visited territory: it is
    /// visited itself, it is the goal, or its parent link points at a
    /// visited cell.
    pub fn new(
        ctx: &'c mut SearchContext<'w, W>,
        target: GridCoord,
    ) -> Result<Self, SearchError> {
        let sensed_from_visited = ctx.parent(target).is_some_and(|p| ctx.is_visited(p));
        if !(ctx.is_visited(target) || target == ctx.goal || sensed_from_visited) {
            return Err(SearchError::InvalidRenavigationTarget { target });
        }

        let size = ctx.visited.size();
        Ok(Self {
            ctx,
            target,
            marks: CellGrid::new(size, VisitationMark::Unseen),
            finished: false,
        })
    }

    /// Did the last [`run`](Self::run) reach the target?
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Walk the robot to the target.
    ///
    /// Returns `Ok(true)` with the robot standing on the target, or
    /// `Ok(false)` with the robot back where it started when no route
    /// through visited cells exists.
    pub fn run(&mut self) -> Result<bool, SearchError> {
        let start = self.ctx.position();
        self.finished = start == self.target;
        if self.finished {
            return Ok(true);
        }

        let steps_before = self.ctx.stats.steps_taken;
        let mut stack = vec![self.open_frame(start, None)];

        while let Some(frame) = stack.last_mut() {
            if self.finished {
                break;
            }

            let cell = frame.cell;
            let next = next_candidate(
                &mut frame.candidates,
                &self.marks,
                &self.ctx.visited,
                self.target,
            );

            match next {
                Some(next) => {
                    self.ctx.step_to(next)?;
                    if next == self.target {
                        self.finished = true;
                        continue;
                    }
                    let child = self.open_frame(next, Some(cell));
                    stack.push(child);
                }
                None => {
                    self.marks.set(cell, VisitationMark::Done);
                    if let Some(back) = stack.pop().and_then(|f| f.return_to) {
                        trace!("[Renav] backtrack {} -> {}", cell, back);
                        self.ctx.step_to(back)?;
                    }
                }
            }
        }

        let walked = self.ctx.stats.steps_taken - steps_before;
        self.ctx.stats.renavigation_steps += walked;
        debug!(
            "[Renav] {} -> {}: {} in {} steps",
            start,
            self.target,
            if self.finished { "reached" } else { "unreachable" },
            walked
        );
        Ok(self.finished)
    }

    /// Mark `cell` in progress and sense its candidates from where the robot stands
    fn open_frame(&mut self, cell: GridCoord, return_to: Option<GridCoord>) -> Frame {
        debug_assert_eq!(self.ctx.position(), cell);
        debug_assert!(return_to.is_none_or(|r| is_adjacent(r, cell)));

        self.marks.set(cell, VisitationMark::InProgress);
        let mut candidates = self.ctx.world.adjacent_free_cells();
        order_for_exploration(&mut candidates);
        // Stored reversed so the preferred candidate pops first
        candidates.reverse();

        Frame {
            cell,
            candidates,
            return_to,
        }
    }
}

/// Next candidate that is unseen in this walk and either visited or the target
fn next_candidate(
    candidates: &mut Vec<GridCoord>,
    marks: &CellGrid<VisitationMark>,
    visited: &CellGrid<bool>,
    target: GridCoord,
) -> Option<GridCoord> {
    while let Some(cell) = candidates.pop() {
        let walkable = visited.value(cell) || cell == target;
        if walkable && marks.value(cell) == VisitationMark::Unseen {
            return Some(cell);
        }
    }
    None
}
