//! Book Record Types
//!
//! This module defines the `Book` entity and the request bodies used to
//! create and update it, together with the validation rule shared by the
//! backend service and the desktop form.
//!
//! # Data Model
//!
//! A book has four fields: a server-assigned integer `id`, required `title`
//! and `author` strings, and an optional `description`. Bodies that omit
//! `description` deserialize with an empty string.

use serde::{Deserialize, Serialize};

/// Validation message returned when `title` or `author` is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and author are required fields.";

/// A single book record in the catalog.
///
/// The `id` is assigned by the book service on creation and is immutable
/// afterwards; update requests carry the id in the URL path, never in the
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned as `max(existing ids) + 1`
    pub id: u32,
    /// Title, required (non-empty)
    pub title: String,
    /// Author, required (non-empty)
    pub author: String,
    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Overlay a partial update onto this record, field by field.
    ///
    /// Fields absent from the patch retain their current values. This is
    /// the shallow-merge contract used by both PUT and PATCH.
    pub fn merge(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Request body for creating a book (`POST /api/books`).
///
/// Every field defaults when missing so that incomplete bodies reach the
/// validator and produce a 400 with a message rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update body accepted by both PUT and PATCH.
///
/// Any `id` field in the body is ignored; the path segment is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validate a candidate book before it enters the collection.
///
/// Returns the validation message when `title` or `author` is empty,
/// `None` when the candidate is acceptable. Pure, no side effects.
pub fn validate_book(book: &Book) -> Option<&'static str> {
    if book.title.is_empty() || book.author.is_empty() {
        return Some(REQUIRED_FIELDS_MESSAGE);
    }
    None
}
