mod amount;
mod errors;
mod file_format;
mod transaction_id;

pub use amount::Amount;
pub use errors::AmountError;
pub use file_format::FileFormat;
pub use transaction_id::TransactionId;
