//! Batch processor
//!
//! Runs the record validator over every entry of a batch, in input order,
//! and partitions the entries into valid records and rejections.
//!
//! Guarantees for every batch:
//! - `valid().len() + aggregate().total_invalid() == total()`
//! - valid records keep their input order
//! - repeated runs over the same input give identical reports

use serde_json::Value;

use super::aggregate::{ErrorAggregate, Violation};
use crate::record::{Record, RecordError};
use crate::schema::{Field, Outcome, RecordValidator};

/// A rejected input entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Zero-based position in the input batch
    pub index: usize,
    /// The violation counted in the aggregate
    pub violation: Violation,
    /// Every failing field, table order. Empty for malformed entries.
    pub failing_fields: Vec<Field>,
    /// Conversion error for malformed entries
    pub error: Option<RecordError>,
}

/// Result of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    aggregate: ErrorAggregate,
    valid: Vec<Record>,
    rejected: Vec<Rejection>,
    total: usize,
}

impl BatchReport {
    pub fn aggregate(&self) -> &ErrorAggregate {
        &self.aggregate
    }

    /// Valid records in input order
    pub fn valid(&self) -> &[Record] {
        &self.valid
    }

    /// Rejected entries in input order
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    /// Number of entries processed
    pub fn total(&self) -> usize {
        self.total
    }

    /// Consumes the report, returning the aggregate and the valid records
    pub fn into_parts(self) -> (ErrorAggregate, Vec<Record>) {
        (self.aggregate, self.valid)
    }

    fn accept(&mut self, record: Record) {
        self.total += 1;
        self.valid.push(record);
    }

    fn reject(&mut self, rejection: Rejection) {
        self.total += 1;
        self.aggregate.record(rejection.violation);
        self.rejected.push(rejection);
    }
}

/// Partitions batches with a borrowed validator.
///
/// Holds no mutable state; one processor can run any number of batches.
pub struct BatchProcessor<'a> {
    validator: &'a RecordValidator,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(validator: &'a RecordValidator) -> Self {
        Self { validator }
    }

    /// Processes raw JSON entries.
    ///
    /// Entries that cannot be read as records are rejected as
    /// `Violation::MalformedRecord`; they never abort the batch.
    pub fn process(&self, entries: &[Value]) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, entry) in entries.iter().enumerate() {
            match Record::from_value(entry) {
                Ok(record) => self.route(&mut report, index, record),
                Err(error) => {
                    tracing::debug!(index, error = %error, "malformed record");
                    report.reject(Rejection {
                        index,
                        violation: Violation::MalformedRecord,
                        failing_fields: Vec::new(),
                        error: Some(error),
                    });
                }
            }
        }

        report
    }

    /// Processes records that were already converted.
    pub fn process_records<I>(&self, records: I) -> BatchReport
    where
        I: IntoIterator<Item = Record>,
    {
        let mut report = BatchReport::default();
        for (index, record) in records.into_iter().enumerate() {
            self.route(&mut report, index, record);
        }
        report
    }

    fn route(&self, report: &mut BatchReport, index: usize, record: Record) {
        match self.validator.classify(&record) {
            Outcome::Valid => report.accept(record),
            Outcome::Invalid(field) => {
                tracing::debug!(index, field = %field, "record rejected");
                report.reject(Rejection {
                    index,
                    violation: Violation::Field(field),
                    failing_fields: self.validator.classify_all(&record),
                    error: None,
                });
            }
        }
    }
}
