//! Error Conversion
//!
//! `IntoResponse` for [`ApiError`], so handlers can return errors directly.
//!
//! # Response Format
//!
//! Error responses are JSON objects with a single `message` field:
//!
//! ```json
//! { "message": "Book not found" }
//! ```
//!
//! Internal errors additionally log their diagnostic detail before the
//! generic message is sent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!("Request handler failed: {}", detail);
        }

        let status: StatusCode = self.status_code();
        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}
