//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe that
//! connects to the backend books API.
//!
//! # Module Structure
//!
//! - **`config`** - Configuration management (server base URL)
//! - **`api`** - HTTP client wrapping the five books API calls
//! - **`state`** - UI state: loaded books, selection, form fields
//! - **`views`** - Book list and add/update form rendering
//! - **`main`** - Application entry point (binary)

pub mod api;
pub mod config;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use api::BookApiClient;
pub use config::Config;
pub use state::AppState;
