use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;

use crate::state::{AppState, LoadState};
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CatalogViewerApp {
    pub state: AppState,
}

impl CatalogViewerApp {
    pub fn new(data_path: PathBuf, search: String) -> Self {
        Self {
            state: AppState::new(data_path, search),
        }
    }
}

impl eframe::App for CatalogViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.poll_load() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // ---- Top panel: title and search ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: counts and load warnings ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: table, or loading / error screen ----
        let mut retry = false;
        egui::CentralPanel::default().show(ctx, |ui| match &self.state.load {
            LoadState::Loading(handle) => table::loading_screen(ui, handle.path()),
            LoadState::Failed(message) => retry = table::error_screen(ui, message),
            LoadState::Ready(_) => table::records_table(ui, &self.state),
        });
        if retry {
            self.state.reload();
        }
    }
}
