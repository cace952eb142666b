use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// The input as a whole is unusable; no row was looked at.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Import file is empty or invalid")]
    Empty,
    #[error("Missing required headers: {}", .headers.join(", "))]
    MissingHeaders {
        headers: Vec<&'static str>
    },
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON must contain an array of transactions")]
    NotAnArray
}

/// Why an import call was rejected. The store is unchanged in every case
/// except `Store(StoreError::Storage(_))`, where the batch was appended in
/// memory but not persisted.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Format(#[from] FormatError),
    /// `row` is the 1-based position of the record among the data rows.
    #[error("Row {row}: {source}")]
    Validation {
        row: usize,
        #[source]
        source: ValidationError
    },
    #[error("Error reading file [{}]: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Unsupported file type [{extension}]")]
    UnsupportedFileType {
        extension: String
    },
    #[error(transparent)]
    Store(#[from] StoreError)
}
