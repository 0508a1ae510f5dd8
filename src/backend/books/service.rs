//! Book Collection Service
//!
//! `BookService` owns the authoritative in-memory collection of books. It is
//! loaded once from its store at construction and re-saved in full after
//! every mutation. The store is injected, so tests run the same service over
//! an in-memory backend.
//!
//! # ID Assignment
//!
//! New ids are `max(existing ids) + 1`, or `1` when the collection is empty.
//! Ids are unique across the live collection at all times; deleting the
//! current maximum makes its id available to the next insert, which is the
//! documented behavior of the formula.

use crate::backend::storage::BookStore;
use crate::shared::{validate_book, Book, BookPatch, NewBook, SharedError};

/// Owner of the in-memory book collection.
pub struct BookService {
    books: Vec<Book>,
    store: Box<dyn BookStore>,
}

impl BookService {
    /// Create a service over the given store, loading whatever the store
    /// currently holds.
    pub fn new(store: Box<dyn BookStore>) -> Self {
        let books = store.load();
        tracing::info!("Loaded {} books from storage", books.len());
        Self { books, store }
    }

    /// All books, in insertion order.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id.
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    fn next_id(&self) -> u32 {
        // max + 1, saturating at the top of the id space instead of wrapping.
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Validate and append a new book, persisting the collection.
    ///
    /// On validation failure nothing is mutated or persisted and the
    /// validation message is returned.
    pub fn add(&mut self, new: NewBook) -> Result<Book, SharedError> {
        let book = Book {
            id: self.next_id(),
            title: new.title,
            author: new.author,
            description: new.description,
        };
        if let Some(message) = validate_book(&book) {
            return Err(SharedError::validation(message));
        }
        self.books.push(book.clone());
        self.store.save(&self.books);
        Ok(book)
    }

    /// Overlay `patch` onto the book with `id` and persist.
    ///
    /// Fields absent from the patch keep their previous values; this is a
    /// shallow merge, not a strict full-record replacement, and it is the
    /// contract for both PUT and PATCH. Returns `None` (with no mutation or
    /// save) when the id does not exist.
    pub fn update(&mut self, id: u32, patch: BookPatch) -> Option<Book> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        book.merge(patch);
        let updated = book.clone();
        self.store.save(&self.books);
        Some(updated)
    }

    /// Apply a partial update. Identical to [`update`](Self::update); both
    /// verbs merge field by field.
    pub fn apply_patch(&mut self, id: u32, patch: BookPatch) -> Option<Book> {
        self.update(id, patch)
    }

    /// Remove the book with `id`, if present, and persist the resulting
    /// collection either way. Missing ids are not an error.
    pub fn remove(&mut self, id: u32) {
        self.books.retain(|book| book.id != id);
        self.store.save(&self.books);
    }
}
