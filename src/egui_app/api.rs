//! Books API Client
//!
//! This module provides the client functions for the books API: list,
//! get-one, create, update, delete. Each function performs one network call
//! and returns the parsed JSON body (or unit for delete). Network failures
//! and non-2xx responses surface as `Err` to the caller; there is no retry.
//!
//! The egui update loop is synchronous, so each call spins up a small tokio
//! runtime and blocks on the request.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::{Book, BookPatch, NewBook};

/// Books API client
pub struct BookApiClient {
    config: Config,
    client: Client,
}

impl BookApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn runtime() -> Result<Runtime, String> {
        Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))
    }

    /// Fetch the whole collection.
    pub fn list_books(&self) -> Result<Vec<Book>, String> {
        let url = self.config.api_url("/api/books");
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            response
                .json::<Vec<Book>>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Fetch a single book by id.
    pub fn get_book(&self, id: u32) -> Result<Book, String> {
        let url = self.config.api_url(&format!("/api/books/{}", id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());

                let friendly_error = match status.as_u16() {
                    404 => "Book not found".to_string(),
                    _ => format!("Request failed: {} - {}", status, error_text),
                };
                return Err(friendly_error);
            }

            response
                .json::<Book>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Create a new book; the server assigns the id.
    pub fn add_book(&self, new_book: &NewBook) -> Result<Book, String> {
        let url = self.config.api_url("/api/books");
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(new_book)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            response
                .json::<Book>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Update an existing book. Fields absent from the patch are kept.
    pub fn update_book(&self, id: u32, patch: &BookPatch) -> Result<Book, String> {
        let url = self.config.api_url(&format!("/api/books/{}", id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .put(&url)
                .header("Content-Type", "application/json")
                .json(patch)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            response
                .json::<Book>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Delete a book by id. A missing id is reported as an error by the
    /// server (404), which surfaces here like any other failed request.
    pub fn delete_book(&self, id: u32) -> Result<(), String> {
        let url = self.config.api_url(&format!("/api/books/{}", id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            Ok(())
        })
    }
}
