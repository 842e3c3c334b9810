//! Embodied path search.
//!
//! This module couples A* with a robot that has no global map:
//!
//! - **A* Search** ([`AgentSearch`]): pops the most promising frontier cell,
//!   moves the robot onto it, senses its free neighbours and relaxes them
//! - **Re-navigation** ([`Renavigator`]): when the next frontier cell is not
//!   adjacent, walks the robot there depth-first through cells it has
//!   already visited
//! - **Geometry**: heuristic, adjacency, step direction, neighbour ordering
//!
//! Both searches share one [`SearchContext`] per run.
//!
//! ## Example
//!
//! ```rust
//! use pathik::search::{AgentSearch, SearchConfig};
//! use pathik::world::{GridWorld, is_simple};
//!
//! let mut world = GridWorld::from_rows(&[
//!     "...",
//!     "##.",
//!     "...",
//! ]).unwrap();
//!
//! let result = AgentSearch::new(&mut world, SearchConfig::default()).run().unwrap();
//! assert!(result.success);
//! assert_eq!(result.cost, 4);
//! assert!(world.check_path(&result.path) && is_simple(&result.path));
//! ```

mod context;
mod engine;
mod frontier;
mod geometry;
mod renavigate;
mod types;

pub use context::SearchContext;
pub use engine::{AgentSearch, find_path};
pub use frontier::{Frontier, TieBreak};
pub use geometry::{direction_towards, heuristic, is_adjacent, order_for_exploration};
pub use renavigate::{Renavigator, VisitationMark};
pub use types::{Expansion, PathResult, SearchConfig, SearchStats};
