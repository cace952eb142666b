use std::path::Path;

use tracing::info;

use crate::export::ExportError;
use crate::models::Transaction;
use crate::types::FileFormat;

pub const CSV_HEADER: &str = "Date,Description,Amount,Type,Context";

/// Renders transactions as CSV, one line per transaction after the header,
/// lines joined by `\n` without a trailing newline.
///
/// Only the description is quoted (with `"` doubled); the other columns
/// cannot contain commas.
pub fn to_csv<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> String {
    let mut output = String::from(CSV_HEADER);

    for transaction in transactions {
        output.push('\n');
        output.push_str(&format!(
            "{},{},{},{},{}",
            transaction.date(),
            quote(transaction.description()),
            transaction.amount(),
            transaction.transaction_type(),
            transaction.context()
        ));
    }

    output
}

/// Renders transactions as a pretty-printed JSON array (two-space indent).
pub fn to_json<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Result<String, serde_json::Error> {
    let transactions: Vec<&Transaction> = transactions.into_iter().collect();
    serde_json::to_string_pretty(&transactions)
}

pub fn export<'a>(transactions: impl IntoIterator<Item = &'a Transaction>, format: FileFormat) -> Result<String, ExportError> {
    match format {
        FileFormat::Csv => Ok(to_csv(transactions)),
        FileFormat::Json => Ok(to_json(transactions)?)
    }
}

/// Serializes and writes the export to `path`, replacing any existing file.
pub async fn export_file<'a>(
    path: impl AsRef<Path>,
    transactions: impl IntoIterator<Item = &'a Transaction>,
    format: FileFormat
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let contents = export(transactions, format)?;

    tokio::fs::write(path, contents).await.map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source
    })?;

    info!("Exported transactions as {format} to {}", path.display());

    Ok(())
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
