//! Bookshelf - Main Library
//!
//! Bookshelf is a small book-catalog management application: an Axum HTTP
//! backend that keeps a collection of book records in memory and mirrors it
//! to a flat JSON file, plus a native egui desktop app that lists the books
//! and drives create/update/delete through a form.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - The `Book` record, request/patch bodies, validation
//!   - Error types and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server exposing the `/api/books` CRUD routes
//!   - The book collection service and JSON file storage
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Book list and add/update form views
//!   - HTTP client wrapping the five API calls
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend module and the
//!   `bookshelf-server` binary together with its dependency set (axum,
//!   tracing-subscriber, dotenv).

pub mod shared;

#[cfg(feature = "server")]
pub mod backend;

pub mod egui_app;
