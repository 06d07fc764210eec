//! Choice entity

use super::question::QuestionId;
use crate::core::error::DomainError;
use crate::core::text::validate_text;
use serde::{Deserialize, Serialize};

/// Identifier of a [`Choice`] (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(i64);

impl ChoiceId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable option of a question, with its vote tally (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: String,
    pub votes: u32,
}

impl Choice {
    pub fn new(id: ChoiceId, question_id: QuestionId, choice_text: impl Into<String>) -> Self {
        Self {
            id,
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
        }
    }

    pub fn with_votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }
}

/// Validated input for adding a choice to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceDraft {
    choice_text: String,
}

impl ChoiceDraft {
    pub fn new(choice_text: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            choice_text: validate_text("choice_text", choice_text.into())?,
        })
    }

    pub fn choice_text(&self) -> &str {
        &self.choice_text
    }

    pub fn into_choice(self, id: ChoiceId, question_id: QuestionId) -> Choice {
        Choice::new(id, question_id, self.choice_text)
    }
}
