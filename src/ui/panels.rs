use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Top bar – title, search box, reload
// ---------------------------------------------------------------------------

/// Render the title row and the search box.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Product list");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            let loading = matches!(state.load, LoadState::Loading(_));
            if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
                state.reload();
            }
        });
    });

    let mut term = state.search.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut term)
            .hint_text("Search by name, ID, source or price…")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.set_search(term);
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Render counts and any row-level anomalies of the last load.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(state.data_path.display().to_string()).weak());
        ui.separator();

        let Some(catalog) = state.catalog() else {
            return;
        };
        ui.label(format!(
            "{} items loaded, {} shown",
            catalog.len(),
            state.visible_indices.len()
        ));

        let report = &catalog.report;
        if report.prices_defaulted > 0 {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "{} without a valid price (shown as 0)",
                    report.prices_defaulted
                ))
                .color(Color32::ORANGE),
            );
        }
        if report.rows_dropped > 0 {
            ui.separator();
            ui.label(format!("{} rows without a name skipped", report.rows_dropped));
        }
        if !report.warnings.is_empty() {
            ui.separator();
            let details = report
                .warnings
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            ui.label(
                RichText::new(format!("{} malformed rows", report.warnings.len()))
                    .color(Color32::YELLOW),
            )
            .on_hover_text(details);
        }
    });
}
