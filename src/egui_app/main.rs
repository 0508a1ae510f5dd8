//! egui Native Desktop App - Main Entry Point
//!
//! Runs the book catalog desktop application. The app fetches the book list
//! from the backend on startup and re-fetches it after every mutation.

use bookshelf::egui_app::{views, AppState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Book Store Management",
        options,
        Box::new(|_cc| Ok(Box::new(BookshelfApp::default()))),
    )
}

/// Main application state
struct BookshelfApp {
    state: AppState,
}

impl Default for BookshelfApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for BookshelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render(ctx, &mut self.state);
    }
}
