//! Application State Management
//!
//! This module defines the application state structure and implements the
//! `FromRef` trait for Axum state extraction.
//!
//! # Thread Safety
//!
//! The book service is wrapped in `Arc<RwLock<>>`: reads (list, get) take a
//! shared lock, mutations take an exclusive one. Each mutation runs to
//! completion while the lock is held, so the in-memory collection and the
//! file write behind it are never interleaved between requests.

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::backend::books::BookService;

/// Shared handle to the book collection service.
pub type SharedBookService = Arc<RwLock<BookService>>;

/// Application state for the Axum router.
#[derive(Clone)]
pub struct AppState {
    /// The book collection service, shared across handlers
    pub books: SharedBookService,
}

/// Allow handlers to extract the book service directly with
/// `State(service): State<SharedBookService>`.
impl FromRef<AppState> for SharedBookService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.books.clone()
    }
}
