//! Schema error types
//!
//! Error codes:
//! - RECVAL_SCHEMA_ERROR (FATAL): a rule table could not be built

use thiserror::Error;

use super::types::Field;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building a rule table
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: Field,
        #[source]
        source: regex::Error,
    },
}

impl SchemaError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidPattern { .. } => "RECVAL_SCHEMA_ERROR",
        }
    }

    /// Returns the field whose rule failed to build
    pub fn field(&self) -> Field {
        match self {
            SchemaError::InvalidPattern { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = SchemaError::InvalidPattern {
            field: Field::Email,
            source,
        };
        assert_eq!(err.code(), "RECVAL_SCHEMA_ERROR");
        assert_eq!(err.field(), Field::Email);
        assert!(err.to_string().contains("email"));
    }
}
