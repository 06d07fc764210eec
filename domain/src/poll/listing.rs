//! Index listing rule
//!
//! [`ListingQuery`] turns "who is asking, and when" into a plain filter
//! value. Repositories translate it into their own query language, and
//! [`ListingQuery::admits`] is the reference semantics they must match.

use super::question::Question;
use crate::access::actor::Actor;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Filter and ordering for the question index (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    /// Only questions with `pub_date <= cutoff` are listed (`None` = no date filter)
    pub published_before: Option<DateTime<Utc>>,
    /// Only questions with at least one choice are listed
    pub require_choices: bool,
    /// Maximum number of questions returned (`None` = unlimited)
    pub limit: Option<usize>,
}

impl ListingQuery {
    /// Build the listing filter for `actor` at time `now`.
    ///
    /// Administrators see everything; everyone else sees published questions
    /// that have at least one choice.
    pub fn for_actor(actor: Actor, now: DateTime<Utc>) -> Self {
        if actor.is_administrator() {
            Self::unfiltered()
        } else {
            Self {
                published_before: Some(now),
                require_choices: true,
                limit: None,
            }
        }
    }

    /// A query that lists every question
    pub fn unfiltered() -> Self {
        Self {
            published_before: None,
            require_choices: false,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `question`, which has `choice_count` choices, passes the filter
    pub fn admits(&self, question: &Question, choice_count: usize) -> bool {
        let date_ok = self
            .published_before
            .is_none_or(|cutoff| question.pub_date <= cutoff);
        let choices_ok = !self.require_choices || choice_count > 0;
        date_ok && choices_ok
    }

    /// Index ordering: newest `pub_date` first, newest id breaking ties
    pub fn compare(a: &Question, b: &Question) -> Ordering {
        b.pub_date.cmp(&a.pub_date).then_with(|| b.id.cmp(&a.id))
    }
}
