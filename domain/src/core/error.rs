//! Domain error types

use thiserror::Error;

/// Domain-level validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} cannot be empty")]
    EmptyText { field: &'static str },

    #[error("{field} is too long ({actual} characters, at most {max} allowed)")]
    TextTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Errors raised by [`PollRepository`](crate::PollRepository) implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Question {0} not found")]
    QuestionNotFound(i64),

    #[error("Choice {0} not found")]
    ChoiceNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Check if this error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::QuestionNotFound(_) | RepositoryError::ChoiceNotFound(_)
        )
    }
}
