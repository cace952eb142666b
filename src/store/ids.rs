use chrono::Utc;
use uuid::Uuid;

use crate::types::TransactionId;

/// Source of transaction ids, injected into the store.
pub trait IdGenerator {
    fn next_id(&mut self) -> TransactionId;
}

/// Millisecond-clock ids that never repeat within one generator, even when
/// many records are created inside the same clock tick.
#[derive(Debug, Clone, Default)]
pub struct MonotonicIds {
    last: u64
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every id produced will be greater than `last`.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&mut self) -> TransactionId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.last = now.max(self.last.saturating_add(1));

        TransactionId::new(self.last.to_string())
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> TransactionId {
        TransactionId::new(Uuid::new_v4().to_string())
    }
}
