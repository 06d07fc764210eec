//! Structured configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate).

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the server cannot start with this configuration.
    Error,
    /// Non-fatal: the server starts but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `server.bind` is not a socket address.
    InvalidBindAddress { value: String },
    /// `database.max_connections` is zero.
    ZeroConnections,
    /// A user's role is not "user" or "administrator".
    InvalidRole { username: String, value: String },
    /// A user has an empty token.
    EmptyToken { username: String },
    /// Two users share a token.
    DuplicateToken { username: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
