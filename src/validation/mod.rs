mod candidate;
mod errors;
mod profile;
mod rules;

pub use candidate::CandidateRecord;
pub use errors::ValidationError;
pub use profile::{validate, ValidatedRecord, ValidationProfile};
pub use rules::{
    is_positive_number, is_valid_context, is_valid_date, is_valid_description, is_valid_type, parse_date,
    MIN_DESCRIPTION_LENGTH
};
