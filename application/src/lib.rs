//! Application layer for polls
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, DEFAULT_INDEX_LIMIT};
pub use ports::{
    authenticator::{Authenticator, NoAuthenticator},
    clock::{Clock, FixedClock},
};
pub use use_cases::cast_vote::{CastVoteError, CastVoteUseCase, NO_CHOICE_SELECTED, VoteOutcome};
pub use use_cases::list_questions::{ListQuestionsUseCase, QuestionListing};
pub use use_cases::manage_polls::{ManagePollsError, ManagePollsUseCase, QuestionPatch};
pub use use_cases::show_question::{ShowQuestionError, ShowQuestionUseCase};
