//! # Pathik
//!
//! A* path search for a robot that has no map of its world.
//!
//! ## Overview
//!
//! The robot starts in the north-west corner (0, 0) of an N×N grid of free
//! and blocked cells and must reach the south-east corner (N-1, N-1). It can
//! only sense the free cells next to the one it stands on, and the search can
//! only expand a cell once the robot has physically walked onto it.
//!
//! - **A\* frontier search** decides which known cell to expand next
//! - **DFS re-navigation** walks the robot, through cells it has already
//!   visited, to a frontier cell that is not adjacent to it
//!
//! ## Quick Start
//!
//! ```rust
//! use pathik::{AgentSearch, MapGenerator, SearchConfig};
//!
//! let mut world = MapGenerator::generate(8, 0.0, 42).unwrap();
//! let result = AgentSearch::new(&mut world, SearchConfig::default())
//!     .run()
//!     .unwrap();
//!
//! assert!(result.success);
//! assert_eq!(result.cost, 14);
//! println!("{} cells, {} physical steps", result.length_cells(), result.stats.steps_taken);
//! ```
//!
//! ## Coordinate System
//!
//! - Row: grows southward
//! - Column: grows eastward
//! - Moves: 4-connected, unit cost

// Core types
pub mod core;

// Grid world, robot interface, map generation
pub mod world;

// A* and re-navigation
pub mod search;

// TOML configuration
pub mod config;

pub mod error;

// Re-export commonly used types
pub use crate::core::{CellType, Direction, GridCoord};

pub use config::{ConfigLoadError, PathikConfig};
pub use error::{MoveError, PathikError, Result, SearchError};
pub use search::{AgentSearch, PathResult, SearchConfig, SearchStats, TieBreak, find_path};
pub use world::{GridWorld, MapGenerator, RobotInterface, is_contiguous, is_simple};
