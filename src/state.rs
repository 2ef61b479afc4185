use std::path::PathBuf;

use log::info;

use crate::data::filter::filtered_indices;
use crate::data::loader::{LoadHandle, spawn_load};
use crate::data::model::{Catalog, Record};

// ---------------------------------------------------------------------------
// Load state
// ---------------------------------------------------------------------------

/// Where the single catalog load stands. A failed load never keeps a
/// partial collection around.
pub enum LoadState {
    Loading(LoadHandle),
    Failed(String),
    Ready(Catalog),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Fixed location of the catalog file.
    pub data_path: PathBuf,

    pub load: LoadState,

    /// Current search box contents.
    pub search: String,

    /// Indices of records matching `search` (cached).
    pub visible_indices: Vec<usize>,
}

impl AppState {
    /// Create the state and start the initial load.
    pub fn new(data_path: PathBuf, search: String) -> Self {
        let load = LoadState::Loading(spawn_load(data_path.clone()));
        Self {
            data_path,
            load,
            search,
            visible_indices: Vec::new(),
        }
    }

    /// Throw away the current collection and load the file again.
    pub fn reload(&mut self) {
        info!("Reloading {}", self.data_path.display());
        self.visible_indices.clear();
        self.load = LoadState::Loading(spawn_load(self.data_path.clone()));
    }

    /// Pick up the result of a running load. Returns `true` while loading.
    pub fn poll_load(&mut self) -> bool {
        let LoadState::Loading(handle) = &self.load else {
            return false;
        };
        match handle.poll() {
            None => true,
            Some(Ok(catalog)) => {
                self.set_catalog(catalog);
                false
            }
            Some(Err(e)) => {
                self.load = LoadState::Failed(e.to_string());
                self.visible_indices.clear();
                false
            }
        }
    }

    /// Ingest a newly loaded catalog and apply the current search.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.load = LoadState::Ready(catalog);
        self.refilter();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refilter();
    }

    /// Recompute `visible_indices` after a search or data change.
    pub fn refilter(&mut self) {
        if let LoadState::Ready(catalog) = &self.load {
            self.visible_indices = filtered_indices(&catalog.records, &self.search);
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.load {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Records matching the current search, in catalog order.
    pub fn visible_records(&self) -> Vec<&Record> {
        match self.catalog() {
            Some(catalog) => self
                .visible_indices
                .iter()
                .map(|&i| &catalog.records[i])
                .collect(),
            None => Vec::new(),
        }
    }
}
