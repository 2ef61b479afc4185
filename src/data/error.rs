use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole load. Row-level anomalies never end up here; they are
/// collected as [`RowWarning`](super::model::RowWarning)s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {message}", path.display())]
    ParseFailure { path: PathBuf, message: String },
}

impl LoadError {
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LoadError::ParseFailure {
            path: path.into(),
            message: message.into(),
        }
    }
}
