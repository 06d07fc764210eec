//! HTTP error mapping
//!
//! Public pages get an HTML 404; the admin API and authentication failures
//! get a JSON body. Storage and template failures are logged and reported
//! as a generic 500.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use polls_application::{CastVoteError, ManagePollsError, ShowQuestionError};
use polls_domain::RepositoryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/404.html");

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum WebError {
    /// Missing or unpublished page (HTML)
    #[error("Not found")]
    NotFound,

    /// Missing record in the admin API (JSON)
    #[error("{0}")]
    MissingResource(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl WebError {
    fn json(status: StatusCode, error: &'static str, message: String) -> Response {
        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            WebError::MissingResource(msg) => Self::json(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            WebError::Unauthorized => {
                let mut response = Self::json(
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Valid bearer token required".to_string(),
                );
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    header::HeaderValue::from_static("Bearer"),
                );
                response
            }
            WebError::Forbidden(msg) => Self::json(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            WebError::BadRequest(msg) => Self::json(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            WebError::Storage(e) => {
                error!("Storage error: {}", e);
                Self::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            WebError::Template(e) => {
                error!("Template error: {:?}", e);
                Self::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        }
    }
}

impl From<ShowQuestionError> for WebError {
    fn from(err: ShowQuestionError) -> Self {
        match err {
            ShowQuestionError::NotFound => WebError::NotFound,
            ShowQuestionError::Repository(e) => WebError::Storage(e),
        }
    }
}

impl From<CastVoteError> for WebError {
    fn from(err: CastVoteError) -> Self {
        match err {
            CastVoteError::NotFound => WebError::NotFound,
            CastVoteError::Repository(e) => WebError::Storage(e),
        }
    }
}

impl From<ManagePollsError> for WebError {
    fn from(err: ManagePollsError) -> Self {
        match err {
            ManagePollsError::Unauthenticated => WebError::Unauthorized,
            ManagePollsError::Forbidden => {
                WebError::Forbidden("Administrator privileges required".to_string())
            }
            ManagePollsError::Invalid(e) => WebError::BadRequest(e.to_string()),
            ManagePollsError::NotFound(msg) => WebError::MissingResource(msg),
            ManagePollsError::Repository(e) => WebError::Storage(e),
        }
    }
}
