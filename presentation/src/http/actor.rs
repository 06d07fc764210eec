//! Request actor extraction
//!
//! No `Authorization` header means [`Actor::Anonymous`]. A header that is
//! present but malformed or carries an unknown token is rejected with 401
//! rather than silently downgraded.

use super::error::WebError;
use super::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use polls_domain::Actor;
use tracing::debug;

/// The actor making the current request
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(CurrentActor(Actor::Anonymous));
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(WebError::Unauthorized)?;

        let principal = state
            .authenticator
            .authenticate(token)
            .await
            .ok_or(WebError::Unauthorized)?;

        debug!("Request by {} ({})", principal.username, principal.actor);
        Ok(CurrentActor(principal.actor))
    }
}
