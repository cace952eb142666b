mod errors;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::ParseVariantError;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense"
        }
    }
}

/// Budget category a transaction is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Personal,
    Home,
    Salary
}

impl Context {
    pub const ALL: [Context; 3] = [Context::Personal, Context::Home, Context::Salary];

    pub fn as_str(self) -> &'static str {
        match self {
            Context::Personal => "personal",
            Context::Home => "home",
            Context::Salary => "salary"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Display for Context {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the lower-case variant names.
impl FromStr for TransactionType {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL.into_iter()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| ParseVariantError::transaction_type(value))
    }
}

/// Exact, case-sensitive match against the lower-case variant names.
impl FromStr for Context {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Context::ALL.into_iter()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| ParseVariantError::context(value))
    }
}
