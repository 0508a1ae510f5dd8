//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the frontend and backend. All types are designed for serialization and
//! transmission over HTTP.

/// Book record and request bodies
pub mod book;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use book::{validate_book, Book, BookPatch, NewBook, REQUIRED_FIELDS_MESSAGE};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
