use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::mood::Mood;
use crate::data::stats::MIN_PLAYS_RANGE;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the left controls panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ui.strong("Minimum plays to include for top lists");
    let mut min_plays = state.inputs.min_plays;
    if ui
        .add(egui::Slider::new(&mut min_plays, MIN_PLAYS_RANGE))
        .changed()
    {
        state.set_min_plays(min_plays);
    }
    ui.add_space(8.0);

    ui.strong("Choose a mood");
    let mut mood = state.inputs.mood;
    egui::ComboBox::from_id_salt("mood")
        .selected_text(mood.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in Mood::ALL {
                ui.selectable_value(&mut mood, option, option.label());
            }
        });
    state.set_mood(mood);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} plays loaded from {}",
                ds.len(),
                state.dataset_path.display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listening history")
        .add_filter("Supported files", &["csv", "tsv", "txt", "json", "parquet", "pq"])
        .add_filter("Delimited text", &["csv", "tsv", "txt"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
