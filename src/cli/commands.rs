//! CLI command implementation
//!
//! A run is a strict sequence:
//! 1. Resolve configuration
//! 2. Load the whole input
//! 3. Classify every record
//! 4. Write the summary, the valid records, and optional diagnostics
//!
//! Nothing is written before every record has been classified.

use crate::batch::{BatchProcessor, BatchReport};
use crate::observability::{self, Event};
use crate::report::{write_rejections, write_summary, write_valid_records};
use crate::schema::{RecordValidator, RuleTable};

use super::args::Cli;
use super::config::{Config, Settings, SummaryTarget};
use super::errors::CliResult;
use super::io::{read_records, write_file, write_stdout};

/// Main CLI entry point
///
/// Parses arguments, installs logging, and runs the pipeline.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    observability::init(cli.log_format);
    run_with(&cli).map(|_| ())
}

/// Runs the pipeline for already-parsed arguments
pub fn run_with(cli: &Cli) -> CliResult<BatchReport> {
    observability::log_event(Event::RunStart);

    let result = Config::from_cli(cli)
        .and_then(Config::resolve)
        .and_then(|settings| {
            tracing::info!(
                event = %Event::ConfigLoaded,
                input = %settings.input_file.display(),
                encoding = settings.encoding.name(),
                worldview = %settings.worldview
            );
            execute(&settings)
        });

    match &result {
        Ok(_) => observability::log_event(Event::RunComplete),
        Err(e) => tracing::error!(event = %Event::RunFailed, code = e.code(), error = %e),
    }
    result
}

/// Load, validate, and write reports for one batch.
///
/// Holds no state between calls; each call builds its own rule table.
pub fn execute(settings: &Settings) -> CliResult<BatchReport> {
    let validator = RecordValidator::new(RuleTable::new(settings.worldview)?);

    let entries = read_records(
        &settings.input_file,
        settings.encoding,
        settings.fallback_encoding,
    )?;
    tracing::info!(event = %Event::InputLoaded, records = entries.len());

    let report = BatchProcessor::new(&validator).process(&entries);
    tracing::info!(
        event = %Event::BatchValidated,
        total = report.total(),
        valid = report.valid().len(),
        invalid = report.aggregate().total_invalid()
    );

    match &settings.summary_target {
        SummaryTarget::Console => {
            write_stdout(|w| write_summary(w, &report, settings.summary_format))?
        }
        SummaryTarget::File(path) => {
            write_file(path, |w| write_summary(w, &report, settings.summary_format))?
        }
    }
    observability::log_event(Event::SummaryWritten);

    write_file(&settings.valid_records_file, |w| {
        write_valid_records(w, report.valid())
    })?;
    tracing::info!(
        event = %Event::ValidRecordsWritten,
        path = %settings.valid_records_file.display(),
        records = report.valid().len()
    );

    if let Some(path) = &settings.invalid_records_file {
        write_file(path, |w| write_rejections(w, report.rejected()))?;
        tracing::info!(
            event = %Event::RejectionsWritten,
            path = %path.display(),
            records = report.rejected().len()
        );
    }

    Ok(report)
}
