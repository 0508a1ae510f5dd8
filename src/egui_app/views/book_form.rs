//! Book Form Component
//!
//! Editable title/author/description fields plus the three actions. With no
//! selection only "Save New" is enabled; once a book is selected the fields
//! are populated from it and "Save"/"Delete" take over.

use eframe::egui;

use crate::egui_app::state::AppState;

/// Render the add/update form
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Add/Update Book");
    ui.add_space(8.0);

    ui.label("Title");
    ui.text_edit_singleline(&mut state.title);
    ui.add_space(4.0);

    ui.label("Author");
    ui.text_edit_singleline(&mut state.author);
    ui.add_space(4.0);

    ui.label("Description");
    ui.add(
        egui::TextEdit::multiline(&mut state.description)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    let has_selection = state.has_selection();
    let mut save_new = false;
    let mut save_update = false;
    let mut delete = false;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!has_selection, egui::Button::new("Save New"))
            .clicked()
        {
            save_new = true;
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Save"))
            .clicked()
        {
            save_update = true;
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            delete = true;
        }
    });

    if save_new {
        state.save_new();
    }
    if save_update {
        state.save_update();
    }
    if delete {
        state.delete_selected();
    }

    if let Some(status) = &state.status {
        ui.add_space(8.0);
        ui.colored_label(egui::Color32::LIGHT_RED, status);
    }
}
