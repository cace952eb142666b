mod errors;
mod filter;
mod ids;
#[cfg(test)]
mod tests;
mod totals;
mod transaction_store;

pub use errors::StoreError;
pub use filter::{DateWindowPolicy, FilterComposition, TransactionFilter};
pub use ids::{IdGenerator, MonotonicIds, UuidIds};
pub use totals::{group_by_date, totals, Totals};
pub use transaction_store::TransactionStore;
