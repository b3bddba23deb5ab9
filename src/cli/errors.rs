//! CLI-specific error types
//!
//! All CLI errors are FATAL: the run stops before or after validation,
//! never in the middle of it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::schema::SchemaError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Cannot read input file {}: {reason}", .path.display())]
    InputUnreadable { path: PathBuf, reason: String },

    #[error("Malformed input file {}: {reason}", .path.display())]
    InputMalformed { path: PathBuf, reason: String },

    #[error("Cannot write {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Input read error
    pub fn input_unreadable(path: &Path, reason: impl Into<String>) -> Self {
        Self::InputUnreadable {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Input parse error
    pub fn input_malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::InputMalformed {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Output write error
    pub fn output_write_failure(path: &Path, source: io::Error) -> Self {
        Self::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound(_) => "RECVAL_INPUT_NOT_FOUND",
            Self::InputUnreadable { .. } => "RECVAL_INPUT_UNREADABLE",
            Self::InputMalformed { .. } => "RECVAL_INPUT_MALFORMED",
            Self::OutputWriteFailure { .. } => "RECVAL_OUTPUT_WRITE_FAILURE",
            Self::Config(_) => "RECVAL_CONFIG_ERROR",
            Self::Schema(e) => e.code(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
