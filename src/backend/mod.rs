//! Backend Module
//!
//! This module contains all server-side code for the bookshelf application.
//!
//! # Architecture
//!
//! - **`storage`** - The JSON file store behind the book collection
//! - **`books`** - The book collection service and its HTTP handlers
//! - **`routes`** - Router assembly
//! - **`server`** - Application state, environment config, app construction
//! - **`error`** - API error types and their HTTP conversions
//!
//! Requests flow router -> handler -> service -> store; every successful
//! mutation rewrites the whole JSON file. Storage failures are logged and
//! swallowed at the store boundary, so callers always observe a completed
//! operation (best-effort persistence, by contract).

pub mod books;
pub mod error;
pub mod routes;
pub mod server;
pub mod storage;
