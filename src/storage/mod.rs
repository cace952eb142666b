mod errors;
mod file_storage;
mod json_persistence;
mod memory_storage;

use crate::models::Transaction;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use json_persistence::JsonPersistence;
pub use memory_storage::MemoryStorage;

/// Durable key-based storage of string values, one value per named slot.
pub trait SlotStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing has been written to `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the whole value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Serialized mirror of the store's transaction collection.
///
/// The store is the only writer. Every `save` overwrites the full collection.
pub trait PersistenceAdapter {
    /// Returns an empty collection when nothing has been stored yet.
    fn get(&self) -> Result<Vec<Transaction>, StorageError>;
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}
