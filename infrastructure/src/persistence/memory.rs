//! In-memory poll repository.
//!
//! Keeps everything in ordered maps behind a single async `RwLock`. Every
//! mutation (vote increments included) happens under the write lock, so
//! concurrent votes cannot overwrite each other.

use async_trait::async_trait;
use polls_domain::{
    Choice, ChoiceDraft, ChoiceId, ListingQuery, PollRepository, Question, QuestionDetail,
    QuestionDraft, QuestionId, RepositoryError,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Store {
    questions: BTreeMap<QuestionId, Question>,
    choices: BTreeMap<ChoiceId, Choice>,
    last_question_id: i64,
    last_choice_id: i64,
}

impl Store {
    fn choice_count(&self, question: QuestionId) -> usize {
        self.choices
            .values()
            .filter(|c| c.question_id == question)
            .count()
    }

    fn choices_of(&self, question: QuestionId) -> Vec<Choice> {
        self.choices
            .values()
            .filter(|c| c.question_id == question)
            .cloned()
            .collect()
    }
}

/// Non-persistent [`PollRepository`]
#[derive(Debug, Default)]
pub struct MemoryPollRepository {
    store: RwLock<Store>,
}

impl MemoryPollRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PollRepository for MemoryPollRepository {
    async fn list_questions(&self, query: &ListingQuery) -> Result<Vec<Question>, RepositoryError> {
        let store = self.store.read().await;
        let mut questions: Vec<Question> = store
            .questions
            .values()
            .filter(|q| query.admits(q, store.choice_count(q.id)))
            .cloned()
            .collect();

        questions.sort_by(ListingQuery::compare);
        if let Some(limit) = query.limit {
            questions.truncate(limit);
        }
        Ok(questions)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<QuestionDetail>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .questions
            .get(&id)
            .map(|q| QuestionDetail::new(q.clone(), store.choices_of(id))))
    }

    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError> {
        let mut store = self.store.write().await;
        match store.choices.get_mut(&choice) {
            Some(c) if c.question_id == question => {
                c.votes = c.votes.saturating_add(1);
                Ok(c.clone())
            }
            _ => Err(RepositoryError::ChoiceNotFound(choice.get())),
        }
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_question_id += 1;
        let question = draft.into_question(QuestionId::new(store.last_question_id));
        store.questions.insert(question.id, question.clone());
        debug!("Stored question {}", question.id);
        Ok(question)
    }

    async fn update_question(
        &self,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<Question, RepositoryError> {
        let mut store = self.store.write().await;
        let slot = store
            .questions
            .get_mut(&id)
            .ok_or(RepositoryError::QuestionNotFound(id.get()))?;
        *slot = draft.into_question(id);
        Ok(slot.clone())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.questions.remove(&id).is_none() {
            return Err(RepositoryError::QuestionNotFound(id.get()));
        }
        store.choices.retain(|_, c| c.question_id != id);
        Ok(())
    }

    async fn add_choice(
        &self,
        question: QuestionId,
        draft: ChoiceDraft,
    ) -> Result<Choice, RepositoryError> {
        let mut store = self.store.write().await;
        if !store.questions.contains_key(&question) {
            return Err(RepositoryError::QuestionNotFound(question.get()));
        }
        store.last_choice_id += 1;
        let choice = draft.into_choice(ChoiceId::new(store.last_choice_id), question);
        store.choices.insert(choice.id, choice.clone());
        Ok(choice)
    }

    async fn delete_choice(&self, id: ChoiceId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .choices
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::ChoiceNotFound(id.get()))
    }
}
