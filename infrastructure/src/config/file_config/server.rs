//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Address the HTTP server binds to when nothing is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on (e.g. "0.0.0.0:8000")
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
