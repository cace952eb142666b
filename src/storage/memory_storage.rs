use crate::storage::{SlotStorage, StorageError};
use dashmap::DashMap;
use std::sync::Arc;

/// In-process slot storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<DashMap<String, String>>,
    quota: Option<usize>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any single write larger than `quota` bytes, like a browser's
    /// local storage limit.
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|value| value.value().clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota.filter(|quota| value.len() > *quota) {
            return Err(StorageError::QuotaExceeded { key: key.to_string(), size: value.len(), quota });
        }

        self.slots.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);

        Ok(())
    }
}
