use serde_json::Value;

use crate::import::FormatError;
use crate::validation::CandidateRecord;

/// Parses a JSON array of transaction-shaped objects. Extra keys such as
/// `id` and `createdAt` are ignored, so an export can be imported again.
pub fn parse_json(text: &str) -> Result<Vec<CandidateRecord>, FormatError> {
    if text.trim().is_empty() {
        return Err(FormatError::Empty);
    }

    let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
        return Err(FormatError::NotAnArray);
    };

    if items.is_empty() {
        return Err(FormatError::Empty);
    }

    Ok(items.iter().map(CandidateRecord::from_json).collect())
}
