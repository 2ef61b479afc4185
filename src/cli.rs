use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::DEFAULT_DATA_PATH;

/// Searchable table viewer for a product catalog CSV file.
#[derive(Parser, Debug)]
#[command(name = "catalog-viewer", version, about)]
pub struct Cli {
    /// CSV file with `id`, `name`, `price` and `source` columns.
    #[arg(long, env = "CATALOG_CSV", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Initial search term.
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Print the matching records to stdout instead of opening a window.
    #[arg(long)]
    pub headless: bool,

    /// With --headless, print JSON instead of a text table.
    #[arg(long, requires = "headless")]
    pub json: bool,
}
