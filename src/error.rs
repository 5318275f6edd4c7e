//! Error types for statdiff operations

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatdiffError>;

#[derive(Error, Debug)]
pub enum StatdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not extract a date from filename '{path}'")]
    InvalidFilename { path: PathBuf },

    #[error("malformed snapshot file '{path}': {message}")]
    MalformedSnapshot { path: PathBuf, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl StatdiffError {
    pub fn invalid_filename(path: impl AsRef<Path>) -> Self {
        Self::InvalidFilename {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn malformed_snapshot(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
