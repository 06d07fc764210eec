//! Cast Vote use case.
//!
//! Records one vote for a choice of a published question. A missing or
//! foreign selection is not an error: the caller gets the question back so
//! it can redisplay the voting form.

use crate::ports::clock::Clock;
use crate::use_cases::shared::find_published;
use polls_domain::{Choice, ChoiceId, PollRepository, QuestionDetail, QuestionId, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Message shown when the vote form is submitted without a usable choice.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// Errors that can occur while casting a vote.
#[derive(Error, Debug)]
pub enum CastVoteError {
    #[error("Question not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result of a vote attempt
#[derive(Debug, Clone)]
pub enum VoteOutcome {
    /// The vote was counted; `choice` carries the new tally
    Recorded { question: QuestionId, choice: Choice },
    /// Nothing valid was selected; the form should be shown again
    NoChoiceSelected(QuestionDetail),
}

/// Use case for casting a vote
#[derive(Clone)]
pub struct CastVoteUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
}

impl CastVoteUseCase {
    pub fn new(repository: Arc<dyn PollRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn execute(
        &self,
        question: QuestionId,
        selected: Option<ChoiceId>,
    ) -> Result<VoteOutcome, CastVoteError> {
        let detail = find_published(self.repository.as_ref(), self.clock.as_ref(), question)
            .await?
            .ok_or(CastVoteError::NotFound)?;

        let Some(choice_id) = selected.filter(|id| detail.choice(*id).is_some()) else {
            debug!("Vote on question {} without a valid choice", question);
            return Ok(VoteOutcome::NoChoiceSelected(detail));
        };

        match self.repository.increment_vote(question, choice_id).await {
            Ok(choice) => {
                info!(
                    "Vote recorded for choice {} of question {} (now {})",
                    choice.id, question, choice.votes
                );
                Ok(VoteOutcome::Recorded { question, choice })
            }
            // Deleted between the lookup and the update
            Err(RepositoryError::ChoiceNotFound(_)) => Ok(VoteOutcome::NoChoiceSelected(detail)),
            Err(RepositoryError::QuestionNotFound(_)) => Err(CastVoteError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
