use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::headless::NO_MATCHES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Record table (central panel)
// ---------------------------------------------------------------------------

/// Render the records matching the current search.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let records = state.visible_records();
    if records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(NO_MATCHES).weak());
        });
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(100.0))
        .header(24.0, |mut header| {
            for title in ["ID", "Name", "Price", "Source"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, records.len(), |mut row| {
                let record = records[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(record.id.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.name.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{} baht", record.price));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.source.as_str());
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Loading / error screens
// ---------------------------------------------------------------------------

pub fn loading_screen(ui: &mut Ui, path: &Path) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
        ui.label(format!("Loading {}…", path.display()));
    });
}

/// Show the load failure. Returns `true` when the user asked to reload.
pub fn error_screen(ui: &mut Ui, message: &str) -> bool {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading("Could not load the catalog");
        ui.label(RichText::new(message).color(Color32::RED));
        ui.add_space(8.0);
        ui.button("Reload").clicked()
    })
    .inner
}
