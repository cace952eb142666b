use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::{Context, TransactionType};
use crate::types::{Amount, AmountError};
use crate::validation::rules::{is_valid_description, parse_date, MIN_DESCRIPTION_LENGTH};
use crate::validation::{CandidateRecord, ValidationError};

/// The strictness a candidate is checked with.
///
/// Manual entry and bulk import disagree on how strict to be, so both rule
/// sets are kept under their own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationProfile {
    /// Form entry: every field present, description of at least
    /// `MIN_DESCRIPTION_LENGTH` characters, exact lower-case enum values.
    #[default]
    Entry,
    /// File import: non-empty description, enum values are lower-cased
    /// before matching.
    Import
}

/// The normalized output of a successful validation, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub(crate) description: String,
    pub(crate) amount: Amount,
    pub(crate) date: NaiveDate,
    pub(crate) transaction_type: TransactionType,
    pub(crate) context: Context
}

impl ValidatedRecord {
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
}

/// Validates a candidate with the manual entry rules.
pub fn validate(candidate: &CandidateRecord) -> Result<ValidatedRecord, ValidationError> {
    ValidationProfile::Entry.validate(candidate)
}

impl ValidationProfile {
    pub fn validate(self, candidate: &CandidateRecord) -> Result<ValidatedRecord, ValidationError> {
        match self {
            ValidationProfile::Entry => validate_entry(candidate),
            ValidationProfile::Import => validate_import(candidate)
        }
    }
}

fn validate_entry(candidate: &CandidateRecord) -> Result<ValidatedRecord, ValidationError> {
    let missing: Vec<&'static str> = candidate.fields().into_iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(name, _)| name)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    let amount = Amount::from_str(candidate.amount.as_deref().unwrap_or_default())
        .map_err(|error| match error {
            AmountError::NotPositive => ValidationError::AmountNotPositive,
            AmountError::InvalidFormat(_) => ValidationError::InvalidAmount
        })?;

    let description = candidate.description.as_deref().unwrap_or_default().trim();

    if !is_valid_description(description) {
        return Err(ValidationError::DescriptionTooShort { min: MIN_DESCRIPTION_LENGTH });
    }

    let date = candidate.date.as_deref()
        .and_then(parse_date)
        .ok_or(ValidationError::InvalidDate)?;

    let transaction_type = candidate.transaction_type.as_deref()
        .and_then(|value| TransactionType::from_str(value).ok())
        .ok_or_else(|| ValidationError::invalid_type(candidate.transaction_type.as_deref()))?;

    let context = candidate.context.as_deref()
        .and_then(|value| Context::from_str(value).ok())
        .ok_or_else(|| ValidationError::invalid_context(candidate.context.as_deref()))?;

    Ok(ValidatedRecord {
        description: description.to_string(),
        amount,
        date,
        transaction_type,
        context
    })
}

fn validate_import(candidate: &CandidateRecord) -> Result<ValidatedRecord, ValidationError> {
    let date = candidate.date.as_deref()
        .and_then(parse_date)
        .ok_or(ValidationError::InvalidDate)?;

    let description = candidate.description.as_deref().unwrap_or_default().trim();

    if description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }

    let amount = candidate.amount.as_deref()
        .and_then(|value| Amount::from_str(value).ok())
        .ok_or(ValidationError::InvalidAmount)?;

    let transaction_type = candidate.transaction_type.as_deref()
        .and_then(|value| TransactionType::from_str(&value.trim().to_lowercase()).ok())
        .ok_or_else(|| ValidationError::invalid_type(candidate.transaction_type.as_deref()))?;

    let context = candidate.context.as_deref()
        .and_then(|value| Context::from_str(&value.trim().to_lowercase()).ok())
        .ok_or_else(|| ValidationError::invalid_context(candidate.context.as_deref()))?;

    Ok(ValidatedRecord {
        description: description.to_string(),
        amount,
        date,
        transaction_type,
        context
    })
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}
