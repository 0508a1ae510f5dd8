//! Books HTTP Handlers
//!
//! Each handler adapts exactly one service operation to one route. Handlers
//! are stateless; the shared [`BookService`] is extracted from application
//! state and locked for the duration of the call, so a mutation never
//! interleaves with another request's.
//!
//! # Id Parsing
//!
//! `{id}` path segments are parsed as integers. A non-numeric segment never
//! matches a stored id and is reported as 404 rather than as a parse error,
//! matching the API's documented behavior.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::server::state::SharedBookService;
use crate::shared::{Book, BookPatch, NewBook};

fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// `GET /` - plain-text banner.
pub async fn index() -> &'static str {
    "Book store management"
}

/// `GET /api/books` - the whole collection as a JSON array.
pub async fn list_books(State(service): State<SharedBookService>) -> Json<Vec<Book>> {
    let service = service.read().await;
    Json(service.all().to_vec())
}

/// `GET /api/books/{id}` - a single book, or 404.
pub async fn get_book(
    State(service): State<SharedBookService>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let service = service.read().await;
    service.get(id).cloned().map(Json).ok_or(ApiError::NotFound)
}

/// `POST /api/books` - create a book, 201 on success, 400 on validation
/// failure.
pub async fn create_book(
    State(service): State<SharedBookService>,
    Json(new): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let mut service = service.write().await;
    let book = service.add(new)?;
    tracing::debug!("Created book {} ({:?})", book.id, book.title);
    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /api/books/{id}` - merge the body onto an existing book, or 404.
pub async fn update_book(
    State(service): State<SharedBookService>,
    Path(id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let mut service = service.write().await;
    service.update(id, patch).map(Json).ok_or(ApiError::NotFound)
}

/// `PATCH /api/books/{id}` - partial update, same merge as PUT.
pub async fn patch_book(
    State(service): State<SharedBookService>,
    Path(id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let mut service = service.write().await;
    service
        .apply_patch(id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /api/books/{id}` - remove a book, 204 on success, 404 when the
/// id does not exist.
pub async fn delete_book(
    State(service): State<SharedBookService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let mut service = service.write().await;
    if service.get(id).is_none() {
        return Err(ApiError::NotFound);
    }
    service.remove(id);
    tracing::debug!("Deleted book {}", id);
    Ok(StatusCode::NO_CONTENT)
}
