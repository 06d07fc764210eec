//! List Questions use case.
//!
//! Produces the index page content: the latest questions the requesting
//! [`Actor`] is allowed to see, newest first.

use crate::config::BehaviorConfig;
use crate::ports::clock::Clock;
use polls_domain::{Actor, ListingQuery, PollRepository, Question, RepositoryError};
use std::sync::Arc;
use tracing::debug;

/// Output of the [`ListQuestionsUseCase`]
#[derive(Debug, Clone)]
pub struct QuestionListing {
    /// Questions to display, newest `pub_date` first
    pub latest_question_list: Vec<Question>,
}

impl QuestionListing {
    pub fn is_empty(&self) -> bool {
        self.latest_question_list.is_empty()
    }
}

/// Use case for listing questions on the index page
#[derive(Clone)]
pub struct ListQuestionsUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
    behavior: BehaviorConfig,
}

impl ListQuestionsUseCase {
    pub fn new(repository: Arc<dyn PollRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub async fn execute(&self, actor: Actor) -> Result<QuestionListing, RepositoryError> {
        let query = ListingQuery::for_actor(actor, self.clock.now())
            .with_limit(self.behavior.index_limit);

        let latest_question_list = self.repository.list_questions(&query).await?;
        debug!(
            "Index for {}: {} question(s)",
            actor,
            latest_question_list.len()
        );

        Ok(QuestionListing {
            latest_question_list,
        })
    }
}
