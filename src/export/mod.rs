mod errors;
mod serializer;

pub use errors::ExportError;
pub use serializer::{export, export_file, to_csv, to_json, CSV_HEADER};
