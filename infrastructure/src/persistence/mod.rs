//! Poll storage adapters implementing [`PollRepository`](polls_domain::PollRepository).
//!
//! - [`MemoryPollRepository`]: non-persistent, for tests and demos
//! - [`SqlitePollRepository`]: SQLite via sqlx

mod memory;
mod sqlite;

pub use memory::MemoryPollRepository;
pub use sqlite::SqlitePollRepository;

use crate::config::FileDatabaseConfig;
use polls_domain::{PollRepository, RepositoryError};
use std::sync::Arc;

/// Open the repository selected by the `[database]` section
pub async fn open_repository(
    config: &FileDatabaseConfig,
) -> Result<Arc<dyn PollRepository>, RepositoryError> {
    if config.is_memory() {
        tracing::warn!("Using in-memory storage; polls are lost on shutdown");
        return Ok(Arc::new(MemoryPollRepository::new()));
    }
    let repository = SqlitePollRepository::connect(&config.url, config.max_connections).await?;
    Ok(Arc::new(repository))
}
