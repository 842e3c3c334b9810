//! World configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;

/// Random map parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSection {
    /// Side length N of the square grid (cells)
    #[serde(default = "defaults::size")]
    pub size: usize,

    /// Probability that any cell other than origin and goal is blocked
    #[serde(default = "defaults::density")]
    pub density: f64,

    /// Generator seed; equal seeds give equal maps
    #[serde(default = "defaults::seed")]
    pub seed: u64,
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            size: defaults::size(),
            density: defaults::density(),
            seed: defaults::seed(),
        }
    }
}

impl WorldSection {
    /// Reject sizes and densities the generator cannot honour
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.size == 0 {
            return Err(ConfigLoadError::Invalid(
                "world.size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigLoadError::Invalid(format!(
                "world.density must be within [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }
}
