use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseVariantError {
    #[error("Unknown transaction type [{value}]")]
    TransactionType {
        value: String
    },
    #[error("Unknown context [{value}]")]
    Context {
        value: String
    }
}

impl ParseVariantError {
    pub fn transaction_type(value: &str) -> Self {
        Self::TransactionType { value: value.to_string() }
    }

    pub fn context(value: &str) -> Self {
        Self::Context { value: value.to_string() }
    }
}
