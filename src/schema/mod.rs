//! Field rule table and record validator
//!
//! # Design Principles
//!
//! - One rule per field, nine fields, fixed order
//! - First failing field decides the outcome
//! - Rule tables are immutable values; nothing is shared between runs
//! - Deterministic validation

mod errors;
mod table;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use table::RuleTable;
pub use types::{Field, Rule, WorldviewSuffixes};
pub use validator::{Outcome, RecordValidator};
