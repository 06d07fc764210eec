//! Poll behavior configuration from TOML (`[polls]` section)

use polls_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw poll behavior configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollsConfig {
    /// Questions shown on the index (absent = 5, 0 = unlimited)
    pub index_limit: Option<usize>,
}

impl FilePollsConfig {
    pub fn to_behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_index_limit(self.index_limit)
    }
}
