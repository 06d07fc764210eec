//! Bearer-token authenticator backed by the `[[users]]` config section.

use crate::config::FileUserConfig;
use async_trait::async_trait;
use polls_application::Authenticator;
use polls_domain::Principal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Looks tokens up in a fixed table built from configuration
#[derive(Debug, Default)]
pub struct TokenAuthenticator {
    principals: HashMap<String, Principal>,
}

impl TokenAuthenticator {
    /// Build the token table, skipping accounts with an unknown role or an
    /// empty token. When two accounts share a token the first one wins.
    pub fn from_users(users: &[FileUserConfig]) -> Self {
        let mut principals = HashMap::new();
        for user in users {
            let Some(actor) = user.parse_role() else {
                warn!("Skipping user '{}': unknown role '{}'", user.username, user.role);
                continue;
            };
            if user.token.trim().is_empty() {
                warn!("Skipping user '{}': empty token", user.username);
                continue;
            }
            if principals.contains_key(&user.token) {
                warn!("Skipping user '{}': duplicate token", user.username);
                continue;
            }
            principals.insert(user.token.clone(), Principal::new(&user.username, actor));
        }
        debug!("Loaded {} account(s)", principals.len());
        Self { principals }
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Option<Principal> {
        self.principals.get(token).cloned()
    }
}
