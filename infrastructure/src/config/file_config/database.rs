//! Database configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};

/// URL value that selects the in-memory store instead of SQLite.
pub const MEMORY_URL: &str = "memory";

/// Raw database configuration from TOML
///
/// # Example
///
/// ```toml
/// [database]
/// url = "sqlite://polls.db"
/// max_connections = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// SQLite URL, or `"memory"` for a non-persistent store
    pub url: String,
    /// Size of the SQLite connection pool
    pub max_connections: u32,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://polls.db".to_string(),
            max_connections: 5,
        }
    }
}

impl FileDatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.eq_ignore_ascii_case(MEMORY_URL)
    }
}
