//! Record error types
//!
//! All record errors share the code RECVAL_MALFORMED_RECORD. They are
//! per-record: a batch counts them and carries on.

use thiserror::Error;

use crate::schema::Field;

/// Result type for record conversion
pub type RecordResult<T> = Result<T, RecordError>;

/// An input entry that cannot be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Record is missing required field '{0}'")]
    MissingField(Field),

    #[error("Field '{field}' must be a string or number, got {found}")]
    InvalidType { field: Field, found: &'static str },
}

impl RecordError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        "RECVAL_MALFORMED_RECORD"
    }

    /// Returns the offending field, if the error concerns one
    pub fn field(&self) -> Option<Field> {
        match self {
            RecordError::NotAnObject { .. } => None,
            RecordError::MissingField(field) => Some(*field),
            RecordError::InvalidType { field, .. } => Some(*field),
        }
    }
}
