//! User accounts from TOML (`[[users]]` array)

use polls_domain::Actor;
use serde::{Deserialize, Serialize};

/// A user account able to authenticate with a bearer token
///
/// # Example
///
/// ```toml
/// [[users]]
/// username = "admin"
/// token = "change-me"
/// role = "administrator"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUserConfig {
    pub username: String,
    pub token: String,
    /// "user" or "administrator"
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl FileUserConfig {
    /// Parse the role; "anonymous" is not a valid account role
    pub fn parse_role(&self) -> Option<Actor> {
        match self.role.parse::<Actor>() {
            Ok(Actor::Anonymous) | Err(_) => None,
            Ok(actor) => Some(actor),
        }
    }
}
