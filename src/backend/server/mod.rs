//! Server Module
//!
//! Application state, environment configuration, and app construction.
//!
//! - **`state`** - `AppState` and its `FromRef` extraction impls
//! - **`config`** - Port and storage path from the environment
//! - **`init`** - `create_app` / `create_app_with_store`

pub mod config;
pub mod init;
pub mod state;
