//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: validation errors for user-supplied text
//! - [`error::RepositoryError`]: storage-level failures
//! - [`text`]: length and blank checks shared by questions and choices

pub mod error;
pub mod text;
