//! Main PathikConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::search::SearchConfig;

use super::error::ConfigLoadError;
use super::search::SearchSection;
use super::world::WorldSection;

/// Default config file looked up by [`PathikConfig::load_default`]
pub const DEFAULT_CONFIG_PATH: &str = "pathik.toml";

/// Full Pathik configuration loaded from TOML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathikConfig {
    /// Random map settings
    #[serde(default)]
    pub world: WorldSection,

    /// Search settings
    #[serde(default)]
    pub search: SearchSection,
}

impl PathikConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Load from `pathik.toml` in the working directory, or defaults if absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.world.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        toml::to_string_pretty(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the search engine config
    pub fn search_config(&self) -> SearchConfig {
        self.search.to_search_config()
    }
}
