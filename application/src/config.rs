//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

/// Number of questions shown on the index when nothing is configured.
pub const DEFAULT_INDEX_LIMIT: usize = 5;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum number of questions on the index page (`None` = unlimited).
    pub index_limit: Option<usize>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            index_limit: Some(DEFAULT_INDEX_LIMIT),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional index limit.
    ///
    /// `None` keeps the default; `Some(0)` removes the cap.
    pub fn from_index_limit(limit: Option<usize>) -> Self {
        match limit {
            None => Self::default(),
            Some(0) => Self { index_limit: None },
            Some(n) => Self {
                index_limit: Some(n),
            },
        }
    }
}
