//! Transaction core of a personal finance tracker.
//!
//! Records flow from a UI form or an import file through validation into a
//! single [`TransactionStore`], which mirrors every change to a
//! [`PersistenceAdapter`] and answers filtered and aggregated queries. The
//! export functions render any view of the store as CSV or JSON.

pub mod config;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

pub use config::TrackerConfig;
pub use export::{to_csv, to_json, ExportError};
pub use import::{import_file, import_text, FormatError, ImportError, ImportSummary};
pub use models::{Context, Transaction, TransactionType};
pub use storage::{FileStorage, JsonPersistence, MemoryStorage, PersistenceAdapter, SlotStorage, StorageError};
pub use store::{totals, DateWindowPolicy, FilterComposition, Totals, TransactionFilter, TransactionStore, StoreError};
pub use types::{Amount, FileFormat, TransactionId};
pub use validation::{CandidateRecord, ValidationError, ValidationProfile};
