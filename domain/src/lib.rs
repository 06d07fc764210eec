//! Domain layer for polls
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions and Choices
//!
//! A [`Question`] is published once its `pub_date` is at or before "now".
//! Each question owns zero or more [`Choice`]s, and each choice carries a
//! vote tally.
//!
//! ## Visibility
//!
//! What the public index shows depends on who is asking:
//!
//! - **Anonymous / OrdinaryUser**: published questions that have at least one choice
//! - **Administrator**: every question, regardless of date or choices
//!
//! The rule is captured by [`ListingQuery`] so every storage backend applies
//! it the same way.

pub mod access;
pub mod core;
pub mod poll;

// Re-export commonly used types
pub use access::actor::{Actor, Principal};
pub use core::error::{DomainError, RepositoryError};
pub use poll::{
    choice::{Choice, ChoiceDraft, ChoiceId},
    listing::ListingQuery,
    question::{Question, QuestionDetail, QuestionDraft, QuestionId, RECENT_WINDOW},
    repository::PollRepository,
};
