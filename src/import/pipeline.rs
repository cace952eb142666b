use std::path::Path;

use tracing::{info, warn};

use crate::import::{parse_csv, parse_json, FormatError, ImportError};
use crate::storage::PersistenceAdapter;
use crate::store::{IdGenerator, TransactionStore};
use crate::types::FileFormat;
use crate::validation::{CandidateRecord, ValidatedRecord, ValidationProfile};

/// Outcome of a successful import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub format: FileFormat,
    pub imported: usize
}

pub fn parse(text: &str, format: FileFormat) -> Result<Vec<CandidateRecord>, FormatError> {
    match format {
        FileFormat::Csv => parse_csv(text),
        FileFormat::Json => parse_json(text)
    }
}

/// Validates every candidate with the import rules, stopping at the first
/// invalid one.
pub fn validate_batch(candidates: &[CandidateRecord]) -> Result<Vec<ValidatedRecord>, ImportError> {
    candidates.iter()
        .enumerate()
        .map(|(index, candidate)| {
            ValidationProfile::Import.validate(candidate).map_err(|source| {
                let row = index + 1;
                warn!("Import rejected at row {row}: {source}");
                ImportError::Validation { row, source }
            })
        })
        .collect()
}

/// Parses and validates `text`, then appends the whole batch to `store`.
///
/// The batch is all-or-nothing: any format or validation error rejects the
/// call before the store is touched.
pub fn import_text<P, G>(store: &mut TransactionStore<P, G>, text: &str, format: FileFormat) -> Result<ImportSummary, ImportError>
where
    P: PersistenceAdapter,
    G: IdGenerator
{
    let candidates = parse(text, format)?;
    let records = validate_batch(&candidates)?;
    let imported = store.append_batch(records)?;

    info!("Imported {imported} transactions from {format} input");

    Ok(ImportSummary { format, imported })
}

/// Reads a whole file as text.
pub async fn read_file(path: &Path) -> Result<String, ImportError> {
    tokio::fs::read_to_string(path).await.map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source
    })
}

/// Imports a `.csv` or `.json` file into `store`, choosing the parser by
/// extension. The file is read to completion before anything is parsed.
pub async fn import_file<P, G>(store: &mut TransactionStore<P, G>, path: impl AsRef<Path>) -> Result<ImportSummary, ImportError>
where
    P: PersistenceAdapter,
    G: IdGenerator
{
    let path = path.as_ref();

    let format = FileFormat::from_path(path).ok_or_else(|| ImportError::UnsupportedFileType {
        extension: path.extension()
            .map(|extension| extension.to_string_lossy().into_owned())
            .unwrap_or_default()
    })?;

    let text = read_file(path).await?;

    import_text(store, &text, format)
}
