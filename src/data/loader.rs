use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::{error, info};

use super::error::LoadError;
use super::model::Catalog;
use super::parse::parse_bytes;

/// Default location of the catalog, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

// ---------------------------------------------------------------------------
// Synchronous loading
// ---------------------------------------------------------------------------

/// Read the whole resource. Text decoding is left to the parser so a bad
/// byte only costs the row it sits in.
pub fn read_resource(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the resource. Either every surviving row comes back or
/// nothing does.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let bytes = read_resource(path)?;
    let catalog = parse_bytes(&bytes).map_err(|e| LoadError::parse_failure(path, e.to_string()))?;

    info!(
        "Loaded {} records from {} ({} read, {} dropped, {} warnings)",
        catalog.len(),
        path.display(),
        catalog.report.rows_read,
        catalog.report.rows_dropped,
        catalog.report.warnings.len()
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// Background loading
// ---------------------------------------------------------------------------

/// A single load running on a worker thread.
pub struct LoadHandle {
    path: PathBuf,
    receiver: Receiver<Result<Catalog, LoadError>>,
}

/// Start loading `path` in the background.
pub fn spawn_load(path: PathBuf) -> LoadHandle {
    let (sender, receiver) = mpsc::channel();
    let worker_path = path.clone();

    let spawned = thread::Builder::new()
        .name("catalog-loader".into())
        .spawn(move || {
            let result = load_catalog(&worker_path);
            if let Err(e) = &result {
                error!("Failed to load catalog: {e}");
            }
            // The receiver is gone when a reload replaced this handle.
            let _ = sender.send(result);
        });

    if let Err(e) = spawned {
        error!("Could not start loader thread: {e}");
    }

    LoadHandle { path, receiver }
}

impl LoadHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the result once it is available, `None` while still loading.
    pub fn poll(&self) -> Option<Result<Catalog, LoadError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::ResourceUnavailable {
                path: self.path.clone(),
                source: std::io::Error::other("loader stopped without a result"),
            })),
        }
    }

    /// Block until the load finishes.
    #[cfg(test)]
    pub fn wait(self) -> Result<Catalog, LoadError> {
        self.receiver.recv().unwrap_or_else(|_| {
            Err(LoadError::ResourceUnavailable {
                path: self.path,
                source: std::io::Error::other("loader stopped without a result"),
            })
        })
    }
}
