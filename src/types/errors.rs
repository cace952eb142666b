use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: value must be greater than zero")]
    NotPositive
}
