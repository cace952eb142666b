use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Context, TransactionType};
use crate::types::{Amount, TransactionId};
use crate::validation::ValidatedRecord;

/// A single validated income or expense record.
///
/// Only the store creates transactions, and only from a `ValidatedRecord`, so
/// every instance satisfies the amount, date and enum invariants. Fields are
/// read-only; a correction is a delete followed by a new add.
///
/// The serialized field order (`id, description, amount, date, type, context,
/// createdAt`) is the JSON export and persistence format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    amount: Amount,
    date: NaiveDate,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    context: Context,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>
}

impl Transaction {
    pub(crate) fn from_record(id: TransactionId, record: ValidatedRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            description: record.description,
            amount: record.amount,
            date: record.date,
            transaction_type: record.transaction_type,
            context: record.context,
            created_at
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Informational only; never used for ordering or filtering.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
