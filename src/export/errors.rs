use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize transactions: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error writing file [{}]: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error
    }
}
