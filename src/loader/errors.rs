use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

use crate::models::AnalysisError;

/// Failures turning an export on disk into a validated dataset.
///
/// Validation failures keep their [`AnalysisError`] as the source so the offending
/// record index and field stay visible in the error chain.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read export at [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Export is not a valid account document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Export parsing task did not complete: {0}")]
    Task(#[from] JoinError),
    #[error("Export contains an invalid purchase record")]
    Invalid(#[from] AnalysisError)
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }
}
