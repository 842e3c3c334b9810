//! Error types for Pathik.
//!
//! Finding no path is a normal outcome reported through
//! [`PathResult`](crate::search::PathResult); the errors here cover bad input
//! and broken internal invariants only.

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::{Direction, GridCoord};

/// Pathik error type
#[derive(Error, Debug)]
pub enum PathikError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Invalid world: {0}")]
    InvalidWorld(String),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// A physical step the world refused to perform.
///
/// The robot's position is unchanged after either variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is blocked")]
    Blocked(GridCoord),

    #[error("moving {direction} from {from} leaves the grid")]
    OutOfBounds { from: GridCoord, direction: Direction },
}

/// Broken invariants detected while searching.
///
/// These indicate a programming error in the engine or a world that does
/// not honour the [`RobotInterface`](crate::world::RobotInterface) contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("world rejected a step from {from} towards {to}: {source}")]
    MoveRejected {
        from: GridCoord,
        to: GridCoord,
        #[source]
        source: MoveError,
    },

    #[error("parent chain broken at {at} before reaching the origin")]
    CorruptParentChain { at: GridCoord },

    #[error("re-navigation target {target} was never sensed from visited territory")]
    InvalidRenavigationTarget { target: GridCoord },
}

pub type Result<T> = std::result::Result<T, PathikError>;
