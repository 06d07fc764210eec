//! Shared router state

use super::templates::Templates;
use polls_application::{
    Authenticator, BehaviorConfig, CastVoteUseCase, Clock, ListQuestionsUseCase,
    ManagePollsUseCase, ShowQuestionUseCase,
};
use polls_domain::PollRepository;
use std::sync::Arc;

/// Use cases and adapters shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub list_questions: ListQuestionsUseCase,
    pub show_question: ShowQuestionUseCase,
    pub cast_vote: CastVoteUseCase,
    pub manage_polls: ManagePollsUseCase,
    pub authenticator: Arc<dyn Authenticator>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn PollRepository>,
        clock: Arc<dyn Clock>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, tera::Error> {
        Ok(Self {
            list_questions: ListQuestionsUseCase::new(repository.clone(), clock.clone()),
            show_question: ShowQuestionUseCase::new(repository.clone(), clock.clone()),
            cast_vote: CastVoteUseCase::new(repository.clone(), clock.clone()),
            manage_polls: ManagePollsUseCase::new(repository, clock),
            authenticator,
            templates: Arc::new(Templates::new()?),
        })
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.list_questions = self.list_questions.with_behavior(behavior);
        self
    }
}
