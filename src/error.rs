// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No file ending with {suffix} in folder {}", .folder.display())]
    NoInput { folder: PathBuf, suffix: String },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed delimited text in {path}: {source}")]
    Format { path: PathBuf, source: csv::Error },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AnalysisError {
    /// Splits a csv failure into the I/O and format halves of the taxonomy.
    pub fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        if err.is_io_error() {
            Self::FileOperation {
                path,
                source: err.into(),
            }
        } else {
            Self::Format { path, source: err }
        }
    }
}
