//! Batch partitioning and error aggregation

mod aggregate;
mod processor;

pub use aggregate::{ErrorAggregate, Violation, MALFORMED_LABEL};
pub use processor::{BatchProcessor, BatchReport, Rejection};
