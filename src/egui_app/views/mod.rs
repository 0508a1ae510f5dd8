//! Views Module
//!
//! Top-level layout for the desktop app: a header bar, the add/update form
//! in a left panel, and the book list filling the rest. Clicking the empty
//! background outside the form and list clears the selection.

use eframe::egui;

use crate::egui_app::state::AppState;

pub mod book_form;
pub mod book_list;

/// Render the whole frame.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    state.ensure_loaded();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading("Book Store Management");
        ui.add_space(4.0);
    });

    egui::SidePanel::left("book_form")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            book_form::render(ui, state);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        book_list::render(ui, state);

        // Clicking the leftover background deselects, like clicking outside
        // the form-and-list container in a web page.
        let background = ui.allocate_response(ui.available_size(), egui::Sense::click());
        if background.clicked() {
            state.clear_selection();
        }
    });
}
