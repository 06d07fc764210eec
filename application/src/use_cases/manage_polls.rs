//! Manage Polls use case.
//!
//! Administrative create/update/delete for questions and choices. Every
//! operation checks the [`Actor`] first; reads here ignore the publication
//! date, unlike the public detail page.

use crate::ports::clock::Clock;
use chrono::{DateTime, Utc};
use polls_domain::{
    Actor, Choice, ChoiceDraft, ChoiceId, DomainError, PollRepository, Question, QuestionDetail,
    QuestionDraft, QuestionId, RepositoryError,
};
use polls_domain::core::text::truncate_str;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during administration.
#[derive(Error, Debug)]
pub enum ManagePollsError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Administrator privileges required")]
    Forbidden,

    #[error("Invalid input: {0}")]
    Invalid(#[from] DomainError),

    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ManagePollsError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            ManagePollsError::NotFound(err.to_string())
        } else {
            ManagePollsError::Repository(err)
        }
    }
}

/// Partial update of a question; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub question_text: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
}

/// Use case for administering questions and choices
#[derive(Clone)]
pub struct ManagePollsUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
}

impl ManagePollsUseCase {
    pub fn new(repository: Arc<dyn PollRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn authorize(actor: Actor) -> Result<(), ManagePollsError> {
        match actor {
            Actor::Administrator => Ok(()),
            Actor::OrdinaryUser => Err(ManagePollsError::Forbidden),
            Actor::Anonymous => Err(ManagePollsError::Unauthenticated),
        }
    }

    /// Fetch any question with its choices, published or not
    pub async fn get_question(
        &self,
        actor: Actor,
        id: QuestionId,
    ) -> Result<QuestionDetail, ManagePollsError> {
        Self::authorize(actor)?;
        self.repository
            .get_question(id)
            .await?
            .ok_or_else(|| RepositoryError::QuestionNotFound(id.get()).into())
    }

    /// Create a question together with its initial choices; `pub_date`
    /// defaults to now.
    ///
    /// All text is validated before anything is written, so invalid input
    /// never leaves a partial question behind.
    pub async fn create_question(
        &self,
        actor: Actor,
        question_text: String,
        pub_date: Option<DateTime<Utc>>,
        choices: Vec<String>,
    ) -> Result<QuestionDetail, ManagePollsError> {
        Self::authorize(actor)?;
        let draft = QuestionDraft::new(question_text, pub_date.unwrap_or_else(|| self.clock.now()))?;
        let choice_drafts = choices
            .into_iter()
            .map(ChoiceDraft::new)
            .collect::<Result<Vec<_>, _>>()?;

        let question = self.repository.create_question(draft).await?;
        let mut stored = Vec::with_capacity(choice_drafts.len());
        for choice in choice_drafts {
            match self.repository.add_choice(question.id, choice).await {
                Ok(choice) => stored.push(choice),
                Err(e) => {
                    warn!("Adding choices to question {} failed, removing it: {}", question.id, e);
                    if let Err(cleanup) = self.repository.delete_question(question.id).await {
                        warn!("Could not remove question {}: {}", question.id, cleanup);
                    }
                    return Err(e.into());
                }
            }
        }

        info!(
            "Created question {} with {} choice(s): {}",
            question.id,
            stored.len(),
            truncate_str(&question.question_text, 60)
        );
        Ok(QuestionDetail::new(question, stored))
    }

    pub async fn update_question(
        &self,
        actor: Actor,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<Question, ManagePollsError> {
        Self::authorize(actor)?;
        let current = self
            .repository
            .get_question(id)
            .await?
            .ok_or(RepositoryError::QuestionNotFound(id.get()))?
            .question;

        let draft = QuestionDraft::new(
            patch.question_text.unwrap_or(current.question_text),
            patch.pub_date.unwrap_or(current.pub_date),
        )?;
        let question = self.repository.update_question(id, draft).await?;
        info!("Updated question {}", id);
        Ok(question)
    }

    pub async fn delete_question(&self, actor: Actor, id: QuestionId) -> Result<(), ManagePollsError> {
        Self::authorize(actor)?;
        self.repository.delete_question(id).await?;
        info!("Deleted question {}", id);
        Ok(())
    }

    pub async fn add_choice(
        &self,
        actor: Actor,
        question: QuestionId,
        choice_text: String,
    ) -> Result<Choice, ManagePollsError> {
        Self::authorize(actor)?;
        let draft = ChoiceDraft::new(choice_text)?;
        let choice = self.repository.add_choice(question, draft).await?;
        info!("Added choice {} to question {}", choice.id, question);
        Ok(choice)
    }

    pub async fn delete_choice(&self, actor: Actor, id: ChoiceId) -> Result<(), ManagePollsError> {
        Self::authorize(actor)?;
        self.repository.delete_choice(id).await?;
        info!("Deleted choice {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Fixture, future, past};

    #[tokio::test]
    async fn test_non_administrators_are_rejected() {
        let fixture = Fixture::new();
        let manage = fixture.manage();

        let anonymous = manage
            .create_question(Actor::Anonymous, "Q".to_string(), None, Vec::new())
            .await;
        assert!(matches!(anonymous, Err(ManagePollsError::Unauthenticated)));

        let user = manage
            .create_question(Actor::OrdinaryUser, "Q".to_string(), None, Vec::new())
            .await;
        assert!(matches!(user, Err(ManagePollsError::Forbidden)));
    }

    #[tokio::test]
    async fn test_create_question_defaults_pub_date_to_now() {
        let fixture = Fixture::new();
        let detail = fixture
            .manage()
            .create_question(
                Actor::Administrator,
                "What's new?".to_string(),
                None,
                vec!["Not much".to_string(), "The sky".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(detail.question.pub_date, fixture.now);
        assert!(detail.question.was_published_recently(fixture.now));
        assert_eq!(detail.choices.len(), 2);
        assert!(detail.choices.iter().all(|c| c.votes == 0));
    }

    #[tokio::test]
    async fn test_create_question_with_invalid_choice_stores_nothing() {
        let fixture = Fixture::new();
        let manage = fixture.manage();
        let result = manage
            .create_question(
                Actor::Administrator,
                "Q?".to_string(),
                None,
                vec!["ok".to_string(), "   ".to_string()],
            )
            .await;
        assert!(matches!(result, Err(ManagePollsError::Invalid(_))));

        let listing = fixture.list().execute(Actor::Administrator).await.unwrap();
        assert!(listing.is_empty());
    }

    #[tokio::test]
    async fn test_create_question_rejects_blank_text() {
        let fixture = Fixture::new();
        let result = fixture
            .manage()
            .create_question(Actor::Administrator, " ".to_string(), None, Vec::new())
            .await;
        assert!(matches!(result, Err(ManagePollsError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_question_keeps_unpatched_fields() {
        let fixture = Fixture::new();
        let id = fixture.question("Old text", past(3)).await;

        let patch = QuestionPatch {
            question_text: Some("New text".to_string()),
            pub_date: None,
        };
        let question = fixture
            .manage()
            .update_question(Actor::Administrator, id, patch)
            .await
            .unwrap();
        assert_eq!(question.question_text, "New text");
        assert_eq!(question.pub_date, fixture.now + past(3));
    }

    #[tokio::test]
    async fn test_admin_can_read_unpublished_question() {
        let fixture = Fixture::new();
        let id = fixture.question("Scheduled", future(10)).await;

        let detail = fixture
            .manage()
            .get_question(Actor::Administrator, id)
            .await
            .unwrap();
        assert_eq!(detail.question.question_text, "Scheduled");
    }

    #[tokio::test]
    async fn test_delete_question_removes_choices() {
        let fixture = Fixture::new();
        let id = fixture.question("Doomed", past(1)).await;
        let choice = fixture.choice(id, "Gone").await;
        let manage = fixture.manage();

        manage.delete_question(Actor::Administrator, id).await.unwrap();

        let missing = manage.get_question(Actor::Administrator, id).await;
        assert!(matches!(missing, Err(ManagePollsError::NotFound(_))));
        let orphan = manage.delete_choice(Actor::Administrator, choice.id).await;
        assert!(matches!(orphan, Err(ManagePollsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_choice_to_missing_question() {
        let fixture = Fixture::new();
        let result = fixture
            .manage()
            .add_choice(Actor::Administrator, QuestionId::new(99), "Yes".to_string())
            .await;
        assert!(matches!(result, Err(ManagePollsError::NotFound(_))));
    }
}
