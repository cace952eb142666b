use thiserror::Error;

/// A candidate record broke one of the transaction invariants.
///
/// Messages are user-facing and shown verbatim by the UI layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("All fields are required (missing: {})", .fields.join(", "))]
    MissingFields {
        fields: Vec<&'static str>
    },
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at least {min} characters")]
    DescriptionTooShort {
        min: usize
    },
    #[error("Type must be either \"income\" or \"expense\", got [{value}]")]
    InvalidType {
        value: String
    },
    #[error("Context must be either \"personal\", \"home\" or \"salary\", got [{value}]")]
    InvalidContext {
        value: String
    }
}

impl ValidationError {
    pub fn invalid_type(value: Option<&str>) -> Self {
        Self::InvalidType { value: value.unwrap_or_default().to_string() }
    }

    pub fn invalid_context(value: Option<&str>) -> Self {
        Self::InvalidContext { value: value.unwrap_or_default().to_string() }
    }
}
