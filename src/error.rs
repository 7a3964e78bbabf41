use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading reviews or writing exports.
#[derive(Error, Debug)]
pub enum AppError {
    /// The review file could not be opened or its header could not be read.
    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
