use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error for slot [{key}]: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error
    },
    #[error("Stored value in slot [{key}] is corrupted: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error
    },
    #[error("Failed to serialize transactions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Writing {size} bytes to slot [{key}] exceeds the storage quota of {quota} bytes")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize
    },
    #[error("Slot key [{key}] is not a valid storage key")]
    InvalidKey {
        key: String
    }
}

impl StorageError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io { key: key.to_string(), source }
    }

    pub fn corrupted(key: &str, source: serde_json::Error) -> Self {
        Self::Corrupted { key: key.to_string(), source }
    }
}
