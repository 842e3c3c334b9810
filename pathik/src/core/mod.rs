//! Core types shared by the world model and the search.
//!
//! ## Type Categories
//!
//! - [`GridCoord`]: `(row, col)` cell index; rows grow southward, columns eastward
//! - [`Direction`]: one cardinal step (N, S, E, W)
//! - [`CellType`]: free or blocked
//! - [`CellGrid`]: dense N×N table used for every per-cell bookkeeping array

mod cell;
mod coord;
mod grid;

pub use cell::CellType;
pub use coord::{Direction, GridCoord};
pub use grid::CellGrid;
