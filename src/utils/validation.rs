// file: src/utils/validation.rs
// description: input validation for folders, suffixes and delimiters
// reference: input validation patterns

use crate::error::{AnalysisError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalysisError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(AnalysisError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Returns the single byte the csv reader expects as a field separator.
    pub fn validate_delimiter(delimiter: &str) -> Result<u8> {
        match delimiter.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
                Ok(*byte)
            }
            _ => Err(AnalysisError::Validation(format!(
                "Delimiter must be a single ASCII character other than quote or newline, got {:?}",
                delimiter
            ))),
        }
    }

    pub fn validate_suffix(suffix: &str) -> Result<()> {
        if suffix.trim().is_empty() {
            return Err(AnalysisError::Validation(
                "File suffix is empty".to_string(),
            ));
        }
        if suffix.contains('/') || suffix.contains('\\') {
            return Err(AnalysisError::Validation(format!(
                "File suffix must not contain a path separator: {}",
                suffix
            )));
        }
        Ok(())
    }
}
