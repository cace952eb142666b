use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::error;

use crate::models::{Transaction, TransactionType};

/// Income and expense sums over a set of transactions. Always recomputed,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal
}

impl Totals {
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Totals::default();

        for transaction in transactions {
            let sum = match transaction.transaction_type() {
                TransactionType::Income => &mut totals.income,
                TransactionType::Expense => &mut totals.expenses
            };

            match sum.checked_add(transaction.amount().value()) {
                Some(value) => *sum = value,
                None => error!("Totals overflow while adding transaction [{}]", transaction.id())
            }
        }

        totals
    }

    /// Income minus expenses; negative when spending exceeds income.
    pub fn net_savings(&self) -> Decimal {
        self.income - self.expenses
    }
}

pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Totals {
    Totals::from_transactions(transactions)
}

/// Groups transactions by calendar date, earliest date first. Within a date
/// the input order is kept.
pub fn group_by_date<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> BTreeMap<NaiveDate, Vec<&'a Transaction>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&'a Transaction>> = BTreeMap::new();

    for transaction in transactions {
        groups.entry(transaction.date()).or_default().push(transaction);
    }

    groups
}
