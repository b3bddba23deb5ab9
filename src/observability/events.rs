//! Observable events for a validation run
//!
//! Events are explicit and typed. Each one is logged once per run, in this
//! order: start, config, input, batch, outputs, complete (or failed).

use std::fmt;

/// Observable events in a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Run begins
    RunStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Input decoded and parsed
    InputLoaded,
    /// All records classified
    BatchValidated,
    /// Summary written
    SummaryWritten,
    /// Valid-records report written
    ValidRecordsWritten,
    /// Rejection diagnostics written
    RejectionsWritten,
    /// Run finished successfully
    RunComplete,
    /// Run aborted (FATAL)
    RunFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RunStart => "RUN_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputLoaded => "INPUT_LOADED",
            Event::BatchValidated => "BATCH_VALIDATED",
            Event::SummaryWritten => "SUMMARY_WRITTEN",
            Event::ValidRecordsWritten => "VALID_RECORDS_WRITTEN",
            Event::RejectionsWritten => "REJECTIONS_WRITTEN",
            Event::RunComplete => "RUN_COMPLETE",
            Event::RunFailed => "RUN_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RunFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
