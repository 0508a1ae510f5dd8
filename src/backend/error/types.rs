//! Backend Error Types
//!
//! This module defines the error type used by the HTTP handlers. Every
//! variant maps onto one row of the API's failure table:
//!
//! - `NotFound` - requested book id absent, or unparseable id segment -> 404
//! - `Validation` - required fields missing on create -> 400
//! - `Internal` - any unexpected failure inside a handler -> 500
//!
//! The client-visible message for `Internal` is always the generic
//! "Internal server error"; the underlying detail is kept for logging only.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors surfaced by the books API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested book does not exist.
    #[error("Book not found")]
    NotFound,

    /// The request body failed validation.
    #[error("Validation failed: {message}")]
    Validation {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// An unexpected failure inside a handler.
    #[error("Internal error: {detail}")]
    Internal {
        /// Diagnostic detail, logged but never sent to the client
        detail: String,
    },
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-visible message for this error
    pub fn message(&self) -> String {
        match self {
            Self::NotFound => "Book not found".to_string(),
            Self::Validation { message } => message.clone(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message } => Self::Validation { message },
            SharedError::SerializationError { message } => Self::Internal { detail: message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::validation("missing fields").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(SharedError::serialization("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound.message(), "Book not found");
    }

    #[test]
    fn test_internal_detail_is_not_client_visible() {
        let error: ApiError = SharedError::serialization("disk exploded").into();
        assert_eq!(error.message(), "Internal server error");
        // The detail stays available for logging via Display.
        assert!(error.to_string().contains("disk exploded"));
    }

    #[test]
    fn test_from_shared_validation_error() {
        let shared = SharedError::validation("Title and author are required fields.");
        let api: ApiError = shared.into();
        match api {
            ApiError::Validation { message } => {
                assert_eq!(message, "Title and author are required fields.");
            }
            _ => panic!("Expected Validation variant"),
        }
    }
}
