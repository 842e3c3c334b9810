//! Robot interface trait.

use crate::core::{Direction, GridCoord};
use crate::error::MoveError;

/// Trait for sensing the robot's surroundings and moving it.
///
/// Implement this trait to connect the search to a simulated grid or to a
/// real robot. The search never sees a global map: everything it learns
/// comes through these calls.
///
/// # Example
///
/// ```ignore
/// struct MyRobot {
///     // Motor and bumper connections
/// }
///
/// impl RobotInterface for MyRobot {
///     fn size(&self) -> usize {
///         self.room_cells
///     }
///
///     fn current_position(&self) -> GridCoord {
///         self.odometry.cell()
///     }
///
///     fn adjacent_free_cells(&self) -> Vec<GridCoord> {
///         self.proximity.free_neighbours()
///     }
///
///     fn move_one_step(&mut self, direction: Direction) -> Result<GridCoord, MoveError> {
///         self.drive.one_cell(direction)
///     }
/// }
/// ```
pub trait RobotInterface {
    /// Side length N of the square world
    fn size(&self) -> usize;

    /// The cell the robot physically occupies
    fn current_position(&self) -> GridCoord;

    /// Free, in-bounds cells adjacent to the current position.
    ///
    /// Only the four neighbours of the robot are visible; nothing further
    /// away is ever reported.
    fn adjacent_free_cells(&self) -> Vec<GridCoord>;

    /// Move one cell in `direction`.
    ///
    /// Returns the new position, or an error (with the position unchanged)
    /// when the destination is blocked or outside the grid.
    fn move_one_step(&mut self, direction: Direction) -> Result<GridCoord, MoveError>;

    /// Target corner of the run
    fn goal(&self) -> GridCoord {
        let last = self.size().saturating_sub(1);
        GridCoord::new(last, last)
    }

    /// Is the robot standing on the goal?
    fn is_at_goal(&self) -> bool {
        self.current_position() == self.goal()
    }
}
