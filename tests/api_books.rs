//! Books API integration tests
//!
//! End-to-end tests over the full router: routes, status codes, JSON bodies,
//! and the merge semantics of PUT/PATCH. Each test gets its own server over
//! an isolated in-memory store.

#![cfg(feature = "server")]

use axum::http::StatusCode;
use axum_test::TestServer;
use bookshelf::backend::server::init::create_app_with_store;
use bookshelf::backend::storage::MemoryStore;
use bookshelf::shared::Book;

fn book(id: u32, title: &str, author: &str, description: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
    }
}

fn server_with(books: Vec<Book>) -> TestServer {
    let store = MemoryStore::with_books(books);
    TestServer::new(create_app_with_store(Box::new(store))).unwrap()
}

fn empty_server() -> TestServer {
    server_with(Vec::new())
}

#[tokio::test]
async fn test_index_banner() {
    let server = empty_server();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Book store management");
}

#[tokio::test]
async fn test_list_empty_collection() {
    let server = empty_server();

    let response = server.get("/api/books").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Book>>(), Vec::new());
}

#[tokio::test]
async fn test_list_returns_books_in_insertion_order() {
    let server = server_with(vec![
        book(1, "Dune", "Frank Herbert", ""),
        book(2, "Hyperion", "Dan Simmons", ""),
    ]);

    let response = server.get("/api/books").await;
    let books: Vec<Book> = response.json();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[1].title, "Hyperion");
}

#[tokio::test]
async fn test_create_on_empty_store_assigns_id_one() {
    let server = empty_server();

    let response = server
        .post("/api/books")
        .json(&serde_json::json!({
            "title": "A",
            "author": "B"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Book = response.json();
    assert_eq!(created, book(1, "A", "B", ""));
}

#[tokio::test]
async fn test_create_assigns_max_plus_one() {
    let server = server_with(vec![
        book(1, "Dune", "Frank Herbert", ""),
        book(7, "Hyperion", "Dan Simmons", ""),
    ]);

    let response = server
        .post("/api/books")
        .json(&serde_json::json!({
            "title": "Ubik",
            "author": "Philip K. Dick"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Book>().id, 8);
}

#[tokio::test]
async fn test_create_without_author_is_rejected() {
    let server = empty_server();

    let response = server
        .post("/api/books")
        .json(&serde_json::json!({
            "title": "A",
            "author": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Title and author are required fields.");

    // The failed create must not have mutated the collection.
    let list = server.get("/api/books").await;
    assert_eq!(list.json::<Vec<Book>>(), Vec::new());
}

#[tokio::test]
async fn test_create_with_missing_fields_is_rejected() {
    let server = empty_server();

    let response = server
        .post("/api/books")
        .json(&serde_json::json!({ "description": "no title or author" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_existing_book() {
    let server = server_with(vec![book(1, "Dune", "Frank Herbert", "Desert planet")]);

    let response = server.get("/api/books/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Book>(),
        book(1, "Dune", "Frank Herbert", "Desert planet")
    );
}

#[tokio::test]
async fn test_get_missing_book_is_404() {
    let server = server_with(vec![book(1, "Dune", "Frank Herbert", "")]);

    let response = server.get("/api/books/2").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    let server = server_with(vec![book(1, "Dune", "Frank Herbert", "")]);

    let response = server.get("/api/books/dune").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_merges_absent_fields() {
    let server = server_with(vec![book(1, "Dune", "Frank Herbert", "old")]);

    let response = server
        .put("/api/books/1")
        .json(&serde_json::json!({ "title": "Dune Messiah" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Book = response.json();
    // PUT is a shallow merge by contract: untouched fields survive.
    assert_eq!(updated, book(1, "Dune Messiah", "Frank Herbert", "old"));
}

#[tokio::test]
async fn test_put_missing_book_is_404() {
    let server = empty_server();

    let response = server
        .put("/api/books/1")
        .json(&serde_json::json!({ "title": "T" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_updates_description_only() {
    let server = server_with(vec![book(1, "A", "B", "")]);

    let response = server
        .patch("/api/books/1")
        .json(&serde_json::json!({ "description": "new" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Book>(), book(1, "A", "B", "new"));
}

#[tokio::test]
async fn test_patch_missing_book_is_404() {
    let server = empty_server();

    let response = server
        .patch("/api/books/9")
        .json(&serde_json::json!({ "description": "new" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_body_id_is_ignored_on_update() {
    let server = server_with(vec![book(1, "A", "B", "")]);

    let response = server
        .put("/api/books/1")
        .json(&serde_json::json!({ "id": 99, "title": "A2" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Book>().id, 1);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let server = server_with(vec![book(1, "A", "B", "")]);

    let response = server.delete("/api/books/1").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.get("/api/books/1").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_book_is_404() {
    let server = empty_server();

    let response = server.delete("/api/books/1").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_id_restarts_at_one_after_deleting_everything() {
    let server = server_with(vec![book(1, "A", "B", "")]);

    server.delete("/api/books/1").await;

    let response = server
        .post("/api/books")
        .json(&serde_json::json!({ "title": "C", "author": "D" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Book>().id, 1);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = empty_server();

    let response = server.get("/api/authors").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
