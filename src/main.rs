mod app;
mod cli;
mod data;
mod headless;
mod state;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use log::warn;

use app::CatalogViewerApp;
use cli::Cli;
use data::filter::filter_records;
use data::loader::load_catalog;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.headless {
        run_headless(&cli)
    } else {
        run_gui(cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_headless(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(&cli.data)?;
    if catalog.is_empty() {
        warn!("{} contains no items", cli.data.display());
    }
    let matching = filter_records(&catalog.records, &cli.search);

    let mut out = std::io::stdout().lock();
    if cli.json {
        headless::write_json(&mut out, &matching)
    } else {
        headless::write_table(&mut out, &matching)
    }
}

fn run_gui(cli: Cli) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogViewerApp::new(cli.data, cli.search)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
