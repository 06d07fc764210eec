//! Actor value object: the privilege class of whoever is making a request

use serde::{Deserialize, Serialize};

/// Privilege class of the requesting identity (Value Object)
///
/// This is a capability tag, not a persisted user record. The presentation
/// layer resolves it once per request and passes it into use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// No credentials supplied
    #[default]
    Anonymous,
    /// Authenticated, without administrative rights
    OrdinaryUser,
    /// Authenticated with administrative rights
    Administrator,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::Anonymous => "anonymous",
            Actor::OrdinaryUser => "user",
            Actor::Administrator => "administrator",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Actor::Anonymous)
    }

    pub fn is_administrator(&self) -> bool {
        matches!(self, Actor::Administrator)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Actor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anonymous" => Ok(Actor::Anonymous),
            "user" | "ordinary_user" => Ok(Actor::OrdinaryUser),
            "admin" | "administrator" | "superuser" => Ok(Actor::Administrator),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// An authenticated identity (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub actor: Actor,
}

impl Principal {
    pub fn new(username: impl Into<String>, actor: Actor) -> Self {
        Self {
            username: username.into(),
            actor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_default_is_anonymous() {
        assert_eq!(Actor::default(), Actor::Anonymous);
        assert!(!Actor::default().is_authenticated());
    }

    #[test]
    fn test_actor_parse_aliases() {
        assert_eq!("admin".parse::<Actor>().unwrap(), Actor::Administrator);
        assert_eq!("Superuser".parse::<Actor>().unwrap(), Actor::Administrator);
        assert_eq!("user".parse::<Actor>().unwrap(), Actor::OrdinaryUser);
        assert!("root".parse::<Actor>().is_err());
    }

    #[test]
    fn test_privilege_checks() {
        assert!(Actor::Administrator.is_administrator());
        assert!(Actor::OrdinaryUser.is_authenticated());
        assert!(!Actor::OrdinaryUser.is_administrator());
    }
}
