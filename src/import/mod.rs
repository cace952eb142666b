mod csv_parser;
mod errors;
mod json_parser;
mod pipeline;

pub use csv_parser::{parse_csv, REQUIRED_HEADERS};
pub use errors::{FormatError, ImportError};
pub use json_parser::parse_json;
pub use pipeline::{import_file, import_text, parse, read_file, validate_batch, ImportSummary};
