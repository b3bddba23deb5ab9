//! CLI module for recval
//!
//! Reads a JSON batch of user records, validates each one, and writes:
//! - an error summary by field (file or stdout)
//! - the valid records
//! - optionally, one diagnostics line per rejected record

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{execute, run, run_with};
pub use config::{Config, Settings, SummaryTarget};
pub use errors::{CliError, CliResult};
pub use io::{decode, parse_records, read_records};
