//! Backend Error Module
//!
//! Error types for the HTTP layer and their conversions to responses.
//!
//! # Module Structure
//!
//! - **`types`** - `ApiError` definition, status-code and message mapping
//! - **`conversion`** - `IntoResponse` implementation producing JSON bodies
//!
//! Handlers return `Result<_, ApiError>` and let Axum render the error:
//! 404 for a missing book, 400 for failed validation, 500 for anything
//! unexpected (with the original error logged for diagnostics).

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
