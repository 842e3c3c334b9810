//! The grid world the robot lives in.
//!
//! - [`RobotInterface`]: what the search may ask of the robot (local sensing
//!   and single steps)
//! - [`GridWorld`]: simulated N×N world implementing that interface
//! - [`MapGenerator`]: seeded random obstacle maps
//! - Path validators used by callers to check a returned path

mod generator;
mod grid_world;
mod interface;
mod path;

pub use generator::MapGenerator;
pub use grid_world::GridWorld;
pub use interface::RobotInterface;
pub use path::{is_contiguous, is_simple, step_count};
