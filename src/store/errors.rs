use crate::storage::StorageError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The in-memory collection already reflects the mutation; only the
    /// persisted mirror is stale.
    #[error("Transaction change was applied but could not be persisted: {0}")]
    Storage(#[from] StorageError),
    #[error("Id generator produced no unused id after {attempts} attempts")]
    IdsExhausted {
        attempts: usize
    }
}
