//! Shared helpers for use cases.
//!
//! Contains the published-question lookup used by both the detail/results
//! pages and vote casting.

use crate::ports::clock::Clock;
use polls_domain::{PollRepository, QuestionDetail, QuestionId, RepositoryError};
use tracing::debug;

/// Fetch a question with its choices if it is published at the clock's "now".
///
/// A missing question and an unpublished one both yield `Ok(None)` so
/// callers cannot reveal that scheduled content exists.
pub(crate) async fn find_published(
    repository: &dyn PollRepository,
    clock: &dyn Clock,
    id: QuestionId,
) -> Result<Option<QuestionDetail>, RepositoryError> {
    let now = clock.now();
    match repository.get_question(id).await? {
        Some(detail) if detail.question.is_published(now) => Ok(Some(detail)),
        Some(_) => {
            debug!("Question {} is not published yet", id);
            Ok(None)
        }
        None => Ok(None),
    }
}
