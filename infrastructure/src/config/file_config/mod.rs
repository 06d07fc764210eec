//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod database;
mod logging;
mod polls;
mod server;
mod users;
mod validation;

pub use database::{FileDatabaseConfig, MEMORY_URL};
pub use logging::FileLoggingConfig;
pub use polls::FilePollsConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use users::FileUserConfig;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Storage settings
    pub database: FileDatabaseConfig,
    /// Index and voting behavior
    pub polls: FilePollsConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
    /// Accounts that may authenticate with a bearer token
    pub users: Vec<FileUserConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The bind address parses as a socket address
    /// 2. The connection pool is not empty
    /// 3. Every user has a known role and a unique, non-empty token
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Bind address
        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBindAddress {
                    value: self.server.bind.clone(),
                },
                message: format!(
                    "server.bind: '{}' is not a valid socket address",
                    self.server.bind
                ),
            });
        }

        // 2. Pool size
        if !self.database.is_memory() && self.database.max_connections == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroConnections,
                message: "database.max_connections must be at least 1".to_string(),
            });
        }

        // 3. Users
        let mut seen_tokens = HashSet::new();
        for user in &self.users {
            if user.parse_role().is_none() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidRole {
                        username: user.username.clone(),
                        value: user.role.clone(),
                    },
                    message: format!(
                        "users.{}: unknown role '{}', account disabled (expected 'user' or 'administrator')",
                        user.username, user.role
                    ),
                });
            }
            if user.token.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyToken {
                        username: user.username.clone(),
                    },
                    message: format!("users.{}: empty token, account disabled", user.username),
                });
            } else if !seen_tokens.insert(user.token.as_str()) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::DuplicateToken {
                        username: user.username.clone(),
                    },
                    message: format!(
                        "users.{}: token is already used by another account",
                        user.username
                    ),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:9000"

[database]
url = "sqlite:///var/lib/polls/polls.db"
max_connections = 8

[polls]
index_limit = 10

[logging]
file = "/var/log/polls.log"

[[users]]
username = "admin"
token = "s3cret"
role = "administrator"

[[users]]
username = "alice"
token = "alice-token"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.polls.index_limit, Some(10));
        assert_eq!(config.logging.file.as_deref(), Some("/var/log/polls.log"));
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[1].role, "user");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[database]
url = "memory"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.database.is_memory());
        // Defaults should apply
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(config.polls.index_limit.is_none());
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_bind_and_pool() {
        let mut config = FileConfig::default();
        config.server.bind = "localhost".to_string();
        config.database.max_connections = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }

    #[test]
    fn test_validate_reports_user_problems() {
        let toml_str = r#"
[[users]]
username = "a"
token = "same"
role = "wizard"

[[users]]
username = "b"
token = "same"

[[users]]
username = "c"
token = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let codes: Vec<ConfigIssueCode> = config.validate().into_iter().map(|i| i.code).collect();

        assert!(codes.contains(&ConfigIssueCode::InvalidRole {
            username: "a".to_string(),
            value: "wizard".to_string(),
        }));
        assert!(codes.contains(&ConfigIssueCode::DuplicateToken {
            username: "b".to_string(),
        }));
        assert!(codes.contains(&ConfigIssueCode::EmptyToken {
            username: "c".to_string(),
        }));
    }
}
