//! Question entity and publication predicates

use super::choice::Choice;
use crate::core::error::DomainError;
use crate::core::text::validate_text;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How far back a question still counts as "recently published".
pub const RECENT_WINDOW: Duration = Duration::days(1);

/// Identifier of a [`Question`] (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pollable question (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn new(id: QuestionId, question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// True iff `now - 1 day <= pub_date <= now`.
    ///
    /// Future questions are never "recent".
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - RECENT_WINDOW <= self.pub_date && self.pub_date <= now
    }

    /// True iff the question's publication date has been reached.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question_text)
    }
}

/// A question together with its choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl QuestionDetail {
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        Self { question, choices }
    }

    /// Sum of votes across all choices
    pub fn total_votes(&self) -> u64 {
        self.choices.iter().map(|c| u64::from(c.votes)).sum()
    }

    /// Find a choice of this question by id
    pub fn choice(&self, id: super::choice::ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }
}

/// Validated input for creating or replacing a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl QuestionDraft {
    pub fn new(
        question_text: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            question_text: validate_text("question_text", question_text.into())?,
            pub_date,
        })
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn pub_date(&self) -> DateTime<Utc> {
        self.pub_date
    }

    /// Build the stored entity once the repository has assigned an id
    pub fn into_question(self, id: QuestionId) -> Question {
        Question::new(id, self.question_text, self.pub_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_at(pub_date: DateTime<Utc>) -> Question {
        Question::new(QuestionId::new(1), "", pub_date)
    }

    #[test]
    fn test_was_published_recently_with_future_question() {
        let now = Utc::now();
        let future_question = question_at(now + Duration::days(30));
        assert!(!future_question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_with_old_question() {
        let now = Utc::now();
        let old_question = question_at(now - Duration::days(1) - Duration::seconds(1));
        assert!(!old_question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_with_recent_question() {
        let now = Utc::now();
        let recent_question =
            question_at(now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59));
        assert!(recent_question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_boundaries() {
        let now = Utc::now();
        assert!(question_at(now).was_published_recently(now));
        assert!(question_at(now - RECENT_WINDOW).was_published_recently(now));
        assert!(!question_at(now + Duration::seconds(1)).was_published_recently(now));
    }

    #[test]
    fn test_is_published() {
        let now = Utc::now();
        assert!(question_at(now).is_published(now));
        assert!(question_at(now - Duration::days(30)).is_published(now));
        assert!(!question_at(now + Duration::seconds(1)).is_published(now));
    }

    #[test]
    fn test_draft_rejects_empty_text() {
        let err = QuestionDraft::new("  ", Utc::now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyText {
                field: "question_text"
            }
        );
    }

    #[test]
    fn test_draft_into_question() {
        let now = Utc::now();
        let question = QuestionDraft::new("What's up?", now)
            .unwrap()
            .into_question(QuestionId::new(7));
        assert_eq!(question.id.get(), 7);
        assert_eq!(question.to_string(), "What's up?");
        assert_eq!(question.pub_date, now);
    }
}
