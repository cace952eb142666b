use csv::{ReaderBuilder, Trim};

use crate::import::FormatError;
use crate::validation::CandidateRecord;

pub const REQUIRED_HEADERS: [&str; 5] = ["date", "description", "amount", "type", "context"];

/// Parses CSV text into candidate records.
///
/// The first non-blank line is the header row; header names are matched
/// case-insensitively after trimming and may appear in any order. Quoted
/// fields (as written by the exporter) are unescaped. Blank lines are
/// skipped.
///
/// # Errors
/// - `FormatError::Empty` if there is no header or no data row.
/// - `FormatError::MissingHeaders` listing every absent required header.
pub fn parse_csv(text: &str) -> Result<Vec<CandidateRecord>, FormatError> {
    let text = text.trim_start_matches('\u{feff}').trim_start();

    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?
        .iter()
        .map(|header| header.to_lowercase())
        .collect();

    //NOTE: A repeated header maps to its last column
    let columns = REQUIRED_HEADERS.map(|required| headers.iter().rposition(|header| header == required));

    let missing: Vec<&'static str> = REQUIRED_HEADERS.into_iter()
        .zip(columns)
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name)
        .collect();

    if !missing.is_empty() {
        return Err(FormatError::MissingHeaders { headers: missing });
    }

    let [date, description, amount, transaction_type, context] = columns;

    let mut candidates = Vec::new();

    for result in reader.records() {
        let record = result?;

        if record.iter().all(str::is_empty) {
            continue;
        }

        let field = |index: Option<usize>| index
            .and_then(|index| record.get(index))
            .map(str::to_string);

        candidates.push(CandidateRecord {
            date: field(date),
            description: field(description),
            amount: field(amount),
            transaction_type: field(transaction_type),
            context: field(context)
        });
    }

    if candidates.is_empty() {
        return Err(FormatError::Empty);
    }

    Ok(candidates)
}
