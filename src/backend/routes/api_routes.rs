//! API Route Handlers
//!
//! This module wires the books CRUD endpoints onto the router:
//!
//! - `GET /api/books` - list the collection
//! - `POST /api/books` - create a book
//! - `GET /api/books/{id}` - fetch one book
//! - `PUT /api/books/{id}` - merge-update a book
//! - `PATCH /api/books/{id}` - partial update (same merge as PUT)
//! - `DELETE /api/books/{id}` - remove a book

use axum::Router;

use crate::backend::books::handlers::{
    create_book, delete_book, get_book, list_books, patch_book, update_book,
};
use crate::backend::server::state::AppState;

/// Configure the books API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/books",
            axum::routing::get(list_books).post(create_book),
        )
        .route(
            "/api/books/{id}",
            axum::routing::get(get_book)
                .put(update_book)
                .patch(patch_book)
                .delete(delete_book),
        )
}
