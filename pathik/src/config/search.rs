//! Search configuration section.

use serde::{Deserialize, Serialize};

use crate::search::{SearchConfig, TieBreak};

use super::defaults;

/// Search configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// How frontier entries with equal f are ordered
    #[serde(default = "defaults::tie_break")]
    pub tie_break: TieBreak,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            tie_break: defaults::tie_break(),
        }
    }
}

impl SearchSection {
    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            tie_break: self.tie_break,
        }
    }
}
