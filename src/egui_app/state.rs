//! UI State
//!
//! `AppState` holds everything the desktop app renders: the fetched book
//! list, the current selection, the editable form fields, and the last
//! status message. All mutations funnel through the methods here so the
//! views stay declarative.
//!
//! After every successful create, update, or delete, the list is re-fetched
//! from the server; the server's collection is the source of truth and the
//! UI never patches it incrementally.

use crate::egui_app::api::BookApiClient;
use crate::egui_app::config::Config;
use crate::shared::{Book, BookPatch, NewBook, REQUIRED_FIELDS_MESSAGE};

/// State for the desktop application.
pub struct AppState {
    api: BookApiClient,
    /// Books as last fetched from the server
    pub books: Vec<Book>,
    /// Currently selected book, if any
    pub selected: Option<Book>,
    /// Form field: title
    pub title: String,
    /// Form field: author
    pub author: String,
    /// Form field: description
    pub description: String,
    /// Last error or prompt to show in the form
    pub status: Option<String>,
    loaded: bool,
}

impl AppState {
    /// Create the state with a client configured from the environment.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Create the state over an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            api: BookApiClient::new(config),
            books: Vec::new(),
            selected: None,
            title: String::new(),
            author: String::new(),
            description: String::new(),
            status: None,
            loaded: false,
        }
    }

    /// Fetch the list on the first frame only.
    pub fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.loaded = true;
            self.refresh();
        }
    }

    /// Re-fetch the whole list from the server.
    pub fn refresh(&mut self) {
        match self.api.list_books() {
            Ok(books) => {
                tracing::debug!("Fetched {} books", books.len());
                self.books = books;
            }
            Err(err) => {
                tracing::error!("Error fetching books: {}", err);
                self.status = Some(err);
            }
        }
    }

    /// Whether a book is currently selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Select a book and populate the form from it.
    pub fn select_book(&mut self, book: Book) {
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.description = book.description.clone();
        self.selected = Some(book);
        self.status = None;
    }

    /// Clear the selection and empty the form.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.title.clear();
        self.author.clear();
        self.description.clear();
    }

    /// Create a new book from the form fields.
    ///
    /// Shows the required-fields prompt locally without issuing a request
    /// when title or author is empty.
    pub fn save_new(&mut self) {
        if self.title.is_empty() || self.author.is_empty() {
            self.status = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return;
        }

        let new_book = NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
        };
        match self.api.add_book(&new_book) {
            Ok(book) => {
                tracing::debug!("Created book {}", book.id);
                self.clear_selection();
                self.status = None;
                self.refresh();
            }
            Err(err) => {
                tracing::error!("Error saving book: {}", err);
                self.status = Some(err);
            }
        }
    }

    /// Push the form fields onto the selected book.
    pub fn save_update(&mut self) {
        let Some(selected) = &self.selected else {
            return;
        };

        let patch = BookPatch {
            title: Some(self.title.clone()),
            author: Some(self.author.clone()),
            description: Some(self.description.clone()),
        };
        match self.api.update_book(selected.id, &patch) {
            Ok(book) => {
                tracing::debug!("Updated book {}", book.id);
                self.clear_selection();
                self.status = None;
                self.refresh();
            }
            Err(err) => {
                tracing::error!("Error updating book: {}", err);
                self.status = Some(err);
            }
        }
    }

    /// Delete the selected book.
    pub fn delete_selected(&mut self) {
        let Some(selected) = &self.selected else {
            return;
        };

        match self.api.delete_book(selected.id) {
            Ok(()) => {
                tracing::debug!("Deleted book {}", selected.id);
                self.clear_selection();
                self.status = None;
                self.refresh();
            }
            Err(err) => {
                tracing::error!("Error deleting book: {}", err);
                self.status = Some(err);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
