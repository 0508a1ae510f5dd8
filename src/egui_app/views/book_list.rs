//! Book List Component
//!
//! Displays all books as clickable rows; clicking a row selects that book
//! and populates the form.

use eframe::egui;

use crate::egui_app::state::AppState;

/// Render the book list
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Book List");
    ui.add_space(8.0);

    if state.books.is_empty() {
        render_empty_state(ui);
        return;
    }

    // Collect row data first to avoid borrow issues with the click handler.
    let rows: Vec<(u32, String)> = state
        .books
        .iter()
        .map(|book| (book.id, format!("{} - {}", book.title, book.author)))
        .collect();
    let selected_id = state.selected.as_ref().map(|book| book.id);

    let mut clicked: Option<u32> = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (id, label) in &rows {
            let is_selected = selected_id == Some(*id);
            if ui.selectable_label(is_selected, label.as_str()).clicked() {
                clicked = Some(*id);
            }
        }
    });

    // Apply the selection after the loop.
    if let Some(id) = clicked {
        if let Some(book) = state.books.iter().find(|book| book.id == id).cloned() {
            state.select_book(book);
        }
    }
}

fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label("No books yet");
        ui.add_space(8.0);
        ui.weak("Add one with the form on the left");
    });
}
