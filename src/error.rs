//! Error types for the Cartel API.
//!
//! Collaborator failures never reach clients as error statuses; they are
//! folded into the diagnostic report. `ApiError` covers the few cases that
//! do map to an HTTP error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Maximum number of characters of underlying error detail that is reported.
pub const DETAIL_LIMIT: usize = 50;

/// Failures of the optional database collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("database module not found")]
    Missing,

    #[error("database handle is not initialized")]
    Uninitialized,

    #[error("{0}")]
    QueryFailed(String),

    #[error("{0}")]
    Failure(String),
}

impl CollaboratorError {
    /// Underlying error message, truncated to [`DETAIL_LIMIT`] characters.
    pub fn detail(&self) -> String {
        truncate_detail(&self.to_string())
    }
}

impl From<sqlx::Error> for CollaboratorError {
    fn from(e: sqlx::Error) -> Self {
        CollaboratorError::QueryFailed(e.to_string())
    }
}

/// Truncate an error message to at most [`DETAIL_LIMIT`] characters.
pub fn truncate_detail(message: &str) -> String {
    message.chars().take(DETAIL_LIMIT).collect()
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_detail_caps_at_limit() {
        let message = "x".repeat(120);
        assert_eq!(truncate_detail(&message).chars().count(), DETAIL_LIMIT);
    }

    #[test]
    fn test_truncate_detail_short_message_untouched() {
        assert_eq!(truncate_detail("no such table"), "no such table");
    }

    #[test]
    fn test_truncate_detail_counts_chars_not_bytes() {
        let message = "é".repeat(60);
        let truncated = truncate_detail(&message);
        assert_eq!(truncated.chars().count(), DETAIL_LIMIT);
        assert_eq!(truncated.len(), DETAIL_LIMIT * 2);
    }

    #[test]
    fn test_query_failed_detail() {
        let err = CollaboratorError::QueryFailed("a".repeat(80));
        assert_eq!(err.detail(), "a".repeat(50));
    }
}
