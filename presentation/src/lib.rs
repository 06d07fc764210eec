//! Presentation layer for polls
//!
//! This crate contains CLI definitions, the axum router with its handlers,
//! and the HTML templates.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{AppState, ErrorResponse, Templates, WebError, router};
