//! Books Module
//!
//! The book collection service and the HTTP handlers that expose it.
//!
//! # Module Structure
//!
//! - **`service`** - `BookService`, owner of the in-memory collection
//! - **`handlers`** - Axum handlers mapping routes onto service calls

pub mod handlers;
pub mod service;

pub use service::BookService;
