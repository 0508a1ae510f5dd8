//! Server Configuration
//!
//! Environment-driven configuration for the backend server. Bad values are
//! logged and replaced with defaults rather than failing startup.
//!
//! # Variables
//!
//! - `SERVER_PORT` - TCP port to bind (default 5500)
//! - `BOOKS_DB_PATH` - path of the JSON catalog file (default `db.json`)

use crate::backend::storage::JsonFileStore;

/// Default TCP port for the backend server.
pub const DEFAULT_PORT: u16 = 5500;

/// Default path of the JSON catalog file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Resolve the server port from `SERVER_PORT`.
///
/// Unset or unparseable values fall back to [`DEFAULT_PORT`] with a logged
/// diagnostic.
pub fn server_port() -> u16 {
    match std::env::var("SERVER_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "SERVER_PORT={:?} is not a valid port, using {}",
                raw,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

/// Build the JSON file store from `BOOKS_DB_PATH`.
pub fn load_store() -> JsonFileStore {
    let path =
        std::env::var("BOOKS_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    tracing::info!("Using book catalog file {:?}", path);
    JsonFileStore::new(path)
}
