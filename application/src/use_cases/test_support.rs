//! Test fixtures for use case tests: a minimal repository and a pinned clock.

use crate::ports::clock::FixedClock;
use crate::use_cases::{
    cast_vote::CastVoteUseCase, list_questions::ListQuestionsUseCase,
    manage_polls::ManagePollsUseCase, show_question::ShowQuestionUseCase,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use polls_domain::{
    Choice, ChoiceDraft, ChoiceId, ListingQuery, PollRepository, Question, QuestionDetail,
    QuestionDraft, QuestionId, RepositoryError,
};
use std::sync::{Arc, Mutex};

pub fn past(days: i64) -> Duration {
    -Duration::days(days)
}

pub fn future(days: i64) -> Duration {
    Duration::days(days)
}

#[derive(Default)]
struct State {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct FakeRepository {
    state: Mutex<State>,
}

#[async_trait]
impl PollRepository for FakeRepository {
    async fn list_questions(&self, query: &ListingQuery) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut questions: Vec<Question> = state
            .questions
            .iter()
            .filter(|q| {
                let count = state.choices.iter().filter(|c| c.question_id == q.id).count();
                query.admits(q, count)
            })
            .cloned()
            .collect();
        questions.sort_by(ListingQuery::compare);
        if let Some(limit) = query.limit {
            questions.truncate(limit);
        }
        Ok(questions)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<QuestionDetail>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.questions.iter().find(|q| q.id == id).map(|q| {
            let choices = state
                .choices
                .iter()
                .filter(|c| c.question_id == id)
                .cloned()
                .collect();
            QuestionDetail::new(q.clone(), choices)
        }))
    }

    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let choice = state
            .choices
            .iter_mut()
            .find(|c| c.id == choice && c.question_id == question)
            .ok_or(RepositoryError::ChoiceNotFound(choice.get()))?;
        choice.votes += 1;
        Ok(choice.clone())
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let id = QuestionId::new(state.next_id());
        let question = draft.into_question(id);
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn update_question(
        &self,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<Question, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let question = state
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(RepositoryError::QuestionNotFound(id.get()))?;
        *question = draft.into_question(id);
        Ok(question.clone())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return Err(RepositoryError::QuestionNotFound(id.get()));
        }
        state.choices.retain(|c| c.question_id != id);
        Ok(())
    }

    async fn add_choice(
        &self,
        question: QuestionId,
        draft: ChoiceDraft,
    ) -> Result<Choice, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.questions.iter().any(|q| q.id == question) {
            return Err(RepositoryError::QuestionNotFound(question.get()));
        }
        let id = ChoiceId::new(state.next_id());
        let choice = draft.into_choice(id, question);
        state.choices.push(choice.clone());
        Ok(choice)
    }

    async fn delete_choice(&self, id: ChoiceId) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.choices.len();
        state.choices.retain(|c| c.id != id);
        if state.choices.len() == before {
            return Err(RepositoryError::ChoiceNotFound(id.get()));
        }
        Ok(())
    }
}

/// Repository plus a clock frozen at `now`
pub struct Fixture {
    pub repository: Arc<FakeRepository>,
    pub now: DateTime<Utc>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(FakeRepository::default()),
            now: Utc::now(),
        }
    }

    fn clock(&self) -> Arc<FixedClock> {
        Arc::new(FixedClock(self.now))
    }

    pub fn list(&self) -> ListQuestionsUseCase {
        ListQuestionsUseCase::new(self.repository.clone(), self.clock())
    }

    pub fn show(&self) -> ShowQuestionUseCase {
        ShowQuestionUseCase::new(self.repository.clone(), self.clock())
    }

    pub fn vote(&self) -> CastVoteUseCase {
        CastVoteUseCase::new(self.repository.clone(), self.clock())
    }

    pub fn manage(&self) -> ManagePollsUseCase {
        ManagePollsUseCase::new(self.repository.clone(), self.clock())
    }

    /// Create a question published `offset` away from now
    pub async fn question(&self, text: &str, offset: Duration) -> QuestionId {
        let draft = QuestionDraft::new(text, self.now + offset).unwrap();
        self.repository.create_question(draft).await.unwrap().id
    }

    pub async fn choice(&self, question: QuestionId, text: &str) -> Choice {
        let draft = ChoiceDraft::new(text).unwrap();
        self.repository.add_choice(question, draft).await.unwrap()
    }
}
