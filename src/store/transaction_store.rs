use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, error, warn};

use crate::models::Transaction;
use crate::storage::{PersistenceAdapter, StorageError};
use crate::store::{IdGenerator, MonotonicIds, StoreError, TransactionFilter};
use crate::types::TransactionId;
use crate::validation::{CandidateRecord, ValidatedRecord, ValidationProfile};

const MAX_ID_ATTEMPTS: usize = 1024;

/// Owns the authoritative transaction collection.
///
/// Insertion order is display order. The persistence adapter is read once on
/// construction and overwritten with the full collection after every
/// mutation. A failed write is reported to the caller, but the in-memory
/// change is kept.
pub struct TransactionStore<P: PersistenceAdapter, G: IdGenerator = MonotonicIds> {
    transactions: Vec<Transaction>,
    ids: HashSet<TransactionId>,
    persistence: P,
    id_generator: G
}

impl<P: PersistenceAdapter> TransactionStore<P> {
    pub fn new(persistence: P) -> Self {
        Self::with_id_generator(persistence, MonotonicIds::new())
    }
}

impl<P: PersistenceAdapter, G: IdGenerator> TransactionStore<P, G> {
    /// Rehydrates from `persistence`. An unreadable or corrupted mirror
    /// degrades to an empty collection.
    pub fn with_id_generator(persistence: P, id_generator: G) -> Self {
        let stored = persistence.get().unwrap_or_else(|error| {
            warn!("Stored transactions could not be read, starting with an empty collection: {error}");
            Vec::new()
        });

        let mut ids = HashSet::with_capacity(stored.len());
        let mut transactions = Vec::with_capacity(stored.len());

        for transaction in stored {
            if transaction.description().trim().is_empty() {
                warn!("Dropping stored transaction [{}] without a description", transaction.id());
                continue;
            }

            if !ids.insert(transaction.id().clone()) {
                warn!("Dropping stored transaction with duplicate id [{}]", transaction.id());
                continue;
            }

            transactions.push(transaction);
        }

        debug!("Transaction store loaded with {} transactions", transactions.len());

        Self {
            transactions,
            ids,
            persistence,
            id_generator
        }
    }

    /// Validates `candidate` with the entry rules and appends the new
    /// transaction.
    ///
    /// # Errors
    /// - `StoreError::Validation` if the candidate is invalid; nothing changes.
    /// - `StoreError::Storage` if persisting failed; the transaction is kept
    ///   in memory.
    pub fn add(&mut self, candidate: &CandidateRecord) -> Result<Transaction, StoreError> {
        let record = ValidationProfile::Entry.validate(candidate)?;
        let id = self.next_unique_id(&HashSet::new())?;
        let transaction = Transaction::from_record(id, record, Utc::now());

        self.ids.insert(transaction.id().clone());
        self.transactions.push(transaction.clone());

        debug!("Transaction [{}] added", transaction.id());

        self.persist()?;

        Ok(transaction)
    }

    /// Appends already-validated records as one batch with a single persist.
    ///
    /// Ids for the whole batch are minted before anything is appended, so an
    /// error leaves the collection untouched unless it is a storage error.
    pub fn append_batch(&mut self, records: Vec<ValidatedRecord>) -> Result<usize, StoreError> {
        let mut minted = HashSet::with_capacity(records.len());
        let mut batch_ids = Vec::with_capacity(records.len());

        for _ in &records {
            let id = self.next_unique_id(&minted)?;
            minted.insert(id.clone());
            batch_ids.push(id);
        }

        let created_at = Utc::now();
        let count = records.len();

        for (id, record) in batch_ids.into_iter().zip(records) {
            self.ids.insert(id.clone());
            self.transactions.push(Transaction::from_record(id, record, created_at));
        }

        debug!("Appended batch of {count} transactions");

        self.persist()?;

        Ok(count)
    }

    /// Removes every transaction with `id` and persists, returning how many
    /// were removed. An unknown id is not an error.
    ///
    /// # Errors
    /// `StoreError::Storage` if persisting failed; the removal is kept in memory.
    pub fn delete(&mut self, id: &TransactionId) -> Result<usize, StoreError> {
        let before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id() != id);
        self.ids.remove(id);

        let removed = before - self.transactions.len();
        debug!("Deleted {removed} transaction(s) with id [{id}]");

        self.persist()?;

        Ok(removed)
    }

    /// Empties the collection and clears the persisted mirror.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.transactions.clear();
        self.ids.clear();

        self.persistence.clear().inspect_err(|error| {
            error!("Failed to clear persisted transactions: {error}");
        })?;

        Ok(())
    }

    /// Transactions matching `filter`, in store order. Never mutates.
    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|transaction| filter.matches(transaction))
            .collect()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id() == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn next_unique_id(&mut self, reserved: &HashSet<TransactionId>) -> Result<TransactionId, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();

            if !self.ids.contains(&id) && !reserved.contains(&id) {
                return Ok(id);
            }
        }

        Err(StoreError::IdsExhausted { attempts: MAX_ID_ATTEMPTS })
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.persistence.save(&self.transactions).inspect_err(|error| {
            error!("Failed to persist {} transactions: {error}", self.transactions.len());
        })
    }
}
