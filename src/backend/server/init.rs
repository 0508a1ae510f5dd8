//! Server Initialization
//!
//! This module builds the Axum application: it constructs the book service
//! over its store, wraps it in shared state, and assembles the router.
//!
//! # Initialization Process
//!
//! 1. Load the catalog from storage into a `BookService`
//! 2. Wrap the service in `Arc<RwLock<>>` application state
//! 3. Create the router with all routes
//!
//! Storage problems never prevent startup; a missing or corrupt catalog
//! file simply loads as an empty collection.

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;

use crate::backend::books::BookService;
use crate::backend::routes::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::storage::BookStore;

/// Create the application over the store named by the environment.
pub fn create_app() -> Router<()> {
    create_app_with_store(Box::new(load_store()))
}

/// Create the application over an explicit store.
///
/// Tests use this with an in-memory store to get an isolated service per
/// server instance.
pub fn create_app_with_store(store: Box<dyn BookStore>) -> Router<()> {
    let service = BookService::new(store);
    let app_state = AppState {
        books: Arc::new(RwLock::new(service)),
    };
    create_router(app_state)
}
