use crate::config::TrackerConfig;
use crate::models::Transaction;
use crate::storage::{PersistenceAdapter, SlotStorage, StorageError};

/// Persists the transaction collection as one JSON array in a single slot.
#[derive(Debug, Clone)]
pub struct JsonPersistence<S: SlotStorage> {
    slots: S,
    key: String
}

impl<S: SlotStorage> JsonPersistence<S> {
    pub fn new(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into()
        }
    }

    pub fn from_config(slots: S, config: &TrackerConfig) -> Self {
        Self::new(slots, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }
}

impl<S: SlotStorage> PersistenceAdapter for JsonPersistence<S> {
    fn get(&self) -> Result<Vec<Transaction>, StorageError> {
        match self.slots.read(&self.key)? {
            Some(contents) if !contents.trim().is_empty() => {
                serde_json::from_str(&contents).map_err(|error| StorageError::corrupted(&self.key, error))
            }
            _ => Ok(Vec::new())
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let contents = serde_json::to_string(transactions)?;
        self.slots.write(&self.key, &contents)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slots.remove(&self.key)
    }
}
