//! Batch-wide error tally

use std::fmt;

use crate::schema::Field;

/// Label used for records that could not be read at all.
pub const MALFORMED_LABEL: &str = "<missing-field>";

/// Why a record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// First field, in table order, that failed its rule
    Field(Field),
    /// The entry was missing a field or held a non-scalar value
    MalformedRecord,
}

impl Violation {
    /// Returns the report label for this violation
    pub fn label(&self) -> &'static str {
        match self {
            Violation::Field(field) => field.as_str(),
            Violation::MalformedRecord => MALFORMED_LABEL,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-field violation counts plus the total number of invalid records.
///
/// Every invalid record contributes exactly one increment, so the field
/// counters and the malformed counter always sum to `total_invalid`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorAggregate {
    by_field: [usize; Field::COUNT],
    malformed: usize,
    total_invalid: usize,
}

impl ErrorAggregate {
    /// Creates an aggregate with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one invalid record
    pub fn record(&mut self, violation: Violation) {
        match violation {
            Violation::Field(field) => self.by_field[field.index()] += 1,
            Violation::MalformedRecord => self.malformed += 1,
        }
        self.total_invalid += 1;
    }

    /// Number of records rejected on this field
    pub fn count(&self, field: Field) -> usize {
        self.by_field[field.index()]
    }

    /// Number of records rejected as malformed
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    /// Number of invalid records
    pub fn total_invalid(&self) -> usize {
        self.total_invalid
    }

    /// Iterates all nine (field, count) pairs in table order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.count(f)))
    }

    /// Sum of the nine field counters
    pub fn field_total(&self) -> usize {
        self.by_field.iter().sum()
    }
}
