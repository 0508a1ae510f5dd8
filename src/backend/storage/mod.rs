//! Book Storage
//!
//! This module persists the book collection as a single JSON document:
//! `{"books": [...]}`, pretty-printed, read and overwritten whole. There is
//! no locking, no atomic rename, and no partial-write protection; a crash
//! mid-write can corrupt the file. That is an accepted limitation of this
//! application.
//!
//! # Error Policy
//!
//! Neither `load` nor `save` surfaces I/O failures to the caller. A missing
//! or malformed file loads as an empty collection, and a failed write leaves
//! the in-memory collection untouched. Diagnostics go through `tracing` so
//! callers cannot distinguish "saved" from "save silently failed" - this is
//! the documented contract, not an oversight.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::shared::{Book, SharedError};

/// On-disk document layout: a single object with a `books` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Catalog {
    #[serde(default)]
    books: Vec<Book>,
}

/// Storage backend for the book collection.
///
/// The book service owns the authoritative in-memory collection; a store
/// only translates it to and from its persisted representation. Implemented
/// by [`JsonFileStore`] for production and [`MemoryStore`] for tests.
pub trait BookStore: Send + Sync {
    /// Read the persisted collection, or an empty one if unavailable.
    fn load(&self) -> Vec<Book>;

    /// Overwrite the persisted collection with `books`. Best effort.
    fn save(&self, books: &[Book]);
}

/// Store backed by a JSON file on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file is not touched
    /// until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Vec<Book> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                tracing::error!("Error loading books data from {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Catalog>(&data) {
            Ok(catalog) => catalog.books,
            Err(err) => {
                tracing::error!(
                    "Error parsing books data from {:?}: {}",
                    self.path,
                    SharedError::from(err)
                );
                Vec::new()
            }
        }
    }

    fn save(&self, books: &[Book]) {
        let catalog = Catalog {
            books: books.to_vec(),
        };
        let data = match serde_json::to_string_pretty(&catalog) {
            Ok(data) => data,
            Err(err) => {
                tracing::error!("Error serializing books data: {}", SharedError::from(err));
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, data) {
            tracing::error!("Error writing books data to {:?}: {}", self.path, err);
        }
    }
}

/// In-memory store used by tests and available as a stub backend.
///
/// Keeps the "persisted" collection in a mutex so a service can save into
/// it through a shared reference, mirroring the file store's interface.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an initial collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> Vec<Book> {
        self.books.lock().expect("memory store poisoned").clone()
    }

    fn save(&self, books: &[Book]) {
        *self.books.lock().expect("memory store poisoned") = books.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_books() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                description: String::new(),
            },
            Book {
                id: 2,
                title: "Hyperion".to_string(),
                author: "Dan Simmons".to_string(),
                description: "Pilgrimage".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        store.save(&sample_books());
        assert_eq!(store.load(), sample_books());
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_load_malformed_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(path);
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_load_without_books_field_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{"novels": []}"#).unwrap();

        let store = JsonFileStore::new(path);
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_save_writes_pretty_printed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample_books());

        let data = std::fs::read_to_string(&path).unwrap();
        assert!(data.contains("\n  \"books\""));
        assert!(data.contains("\"title\": \"Dune\""));
    }

    #[test]
    fn test_save_to_unwritable_path_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // The backing path is a directory, so every write fails.
        let store = JsonFileStore::new(dir.path());

        store.save(&sample_books());
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        store.save(&sample_books());
        store.save(&[]);
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_memory_store_round_trips() {
        let store = MemoryStore::new();
        store.save(&sample_books());
        assert_eq!(store.load(), sample_books());
    }
}
