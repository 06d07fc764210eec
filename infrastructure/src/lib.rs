//! Infrastructure layer for polls
//!
//! This crate contains adapters that implement the ports defined
//! in the domain and application layers, including configuration file loading.

pub mod auth;
pub mod clock;
pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use auth::TokenAuthenticator;
pub use clock::SystemClock;
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileDatabaseConfig,
    FileLoggingConfig, FilePollsConfig, FileServerConfig, FileUserConfig, Severity,
};
pub use persistence::{MemoryPollRepository, SqlitePollRepository, open_repository};
