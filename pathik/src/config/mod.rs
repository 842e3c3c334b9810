//! Configuration loading for Pathik.
//!
//! Loads all configuration from a single TOML file with sensible defaults.
//!
//! ## Example TOML
//!
//! ```toml
//! [world]
//! size = 10       # 10x10 grid
//! density = 0.25  # a quarter of the cells blocked
//! seed = 42
//!
//! [search]
//! tie_break = "newest"   # newest | oldest | lexicographic
//! ```

mod defaults;
mod error;
mod pathik;
mod search;
mod world;

pub use error::ConfigLoadError;
pub use pathik::{DEFAULT_CONFIG_PATH, PathikConfig};
pub use search::SearchSection;
pub use world::WorldSection;
