//! Poll repository trait

use super::choice::{Choice, ChoiceDraft, ChoiceId};
use super::listing::ListingQuery;
use super::question::{Question, QuestionDetail, QuestionDraft, QuestionId};
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Repository trait for questions and their choices
///
/// This is a domain-level abstraction that defines how polls are stored.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// List questions matching `query`, ordered by [`ListingQuery::compare`]
    async fn list_questions(&self, query: &ListingQuery) -> Result<Vec<Question>, RepositoryError>;

    /// Fetch a question with its choices (ordered by choice id)
    async fn get_question(&self, id: QuestionId) -> Result<Option<QuestionDetail>, RepositoryError>;

    /// Atomically add one vote to `choice`, which must belong to `question`
    ///
    /// Returns the updated choice, or [`RepositoryError::ChoiceNotFound`].
    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError>;

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, RepositoryError>;

    /// Replace the text and publication date of an existing question
    async fn update_question(
        &self,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<Question, RepositoryError>;

    /// Delete a question and all of its choices
    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError>;

    async fn add_choice(
        &self,
        question: QuestionId,
        draft: ChoiceDraft,
    ) -> Result<Choice, RepositoryError>;

    async fn delete_choice(&self, id: ChoiceId) -> Result<(), RepositoryError>;
}
