//! Poll domain.
//!
//! - [`question::Question`]: a pollable item with a publication date
//! - [`choice::Choice`]: an option of a question, with its vote tally
//! - [`listing::ListingQuery`]: the index visibility rule
//! - [`repository::PollRepository`]: trait for poll persistence

pub mod choice;
pub mod listing;
pub mod question;
pub mod repository;
