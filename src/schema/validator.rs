//! Record validator
//!
//! Validation semantics:
//! - Rules are evaluated in table order
//! - The first failing field decides the outcome; later fields are not checked
//! - Validation is pure: no mutation, no state kept between calls

use std::fmt;

use serde_json::Value;

use super::table::RuleTable;
use super::types::Field;
use crate::record::{Record, RecordResult};

/// Verdict for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All nine rules passed
    Valid,
    /// The first field, in table order, that failed its rule
    Invalid(Field),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Returns the failing field, if any
    pub fn failing_field(&self) -> Option<Field> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(field) => Some(*field),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid => write!(f, "valid"),
            Outcome::Invalid(field) => write!(f, "invalid ({})", field),
        }
    }
}

/// Classifies records against a rule table.
pub struct RecordValidator {
    table: RuleTable,
}

impl RecordValidator {
    /// Creates a validator that owns the given table.
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Returns the rule table
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Classifies a record, stopping at the first failing field.
    pub fn classify(&self, record: &Record) -> Outcome {
        self.table
            .iter()
            .find(|(field, rule)| !rule.check(record.get(*field)))
            .map_or(Outcome::Valid, |(field, _)| Outcome::Invalid(field))
    }

    /// Returns every field that fails its rule, in table order.
    ///
    /// An empty result means the record is valid. The first element, when
    /// present, is always the field `classify` reports.
    pub fn classify_all(&self, record: &Record) -> Vec<Field> {
        self.table
            .iter()
            .filter(|(field, rule)| !rule.check(record.get(*field)))
            .map(|(field, _)| field)
            .collect()
    }

    /// Classifies a raw JSON entry.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if the entry cannot be read as a record.
    pub fn classify_value(&self, value: &Value) -> RecordResult<Outcome> {
        let record = Record::from_value(value)?;
        Ok(self.classify(&record))
    }
}
