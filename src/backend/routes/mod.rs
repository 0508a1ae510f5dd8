//! Routes Module
//!
//! Router assembly for the backend server.
//!
//! - **`router`** - Top-level router creation (banner route, fallback, state)
//! - **`api_routes`** - The `/api/books` route table

pub mod api_routes;
pub mod router;

pub use router::create_router;
