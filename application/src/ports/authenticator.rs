//! Authentication port
//!
//! Resolves a bearer credential into a [`Principal`]. The presentation layer
//! falls back to [`Actor::Anonymous`](polls_domain::Actor::Anonymous) when no
//! credential is supplied at all.

use async_trait::async_trait;
use polls_domain::Principal;

/// Maps credentials to authenticated identities
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `None` if the token is not recognized
    async fn authenticate(&self, token: &str) -> Option<Principal>;
}

/// Authenticator that recognizes nobody
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
    async fn authenticate(&self, _token: &str) -> Option<Principal> {
        None
    }
}
