//! recval - validate batches of user records against a fixed field rule table
//!
//! Pipeline: load → validate-all → summarize → write.

pub mod batch;
pub mod cli;
pub mod observability;
pub mod record;
pub mod report;
pub mod schema;
