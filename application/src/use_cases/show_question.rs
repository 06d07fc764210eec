//! Show Question use case.
//!
//! Backs both the detail page and the results page. Unpublished questions
//! are reported exactly like missing ones, for every actor.

use crate::ports::clock::Clock;
use crate::use_cases::shared::find_published;
use polls_domain::{PollRepository, QuestionDetail, QuestionId, RepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while showing a question.
#[derive(Error, Debug)]
pub enum ShowQuestionError {
    #[error("Question not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for showing a published question with its choices
#[derive(Clone)]
pub struct ShowQuestionUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
}

impl ShowQuestionUseCase {
    pub fn new(repository: Arc<dyn PollRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn execute(&self, id: QuestionId) -> Result<QuestionDetail, ShowQuestionError> {
        find_published(self.repository.as_ref(), self.clock.as_ref(), id)
            .await?
            .ok_or(ShowQuestionError::NotFound)
    }
}
