//! CLI argument definitions using clap
//!
//! recval [--input-file <path>] [--output-file <path>] [--console]
//!        [--config <path>] [--encoding <label>] [--fallback-encoding <label>]
//!        [--worldview strict|extended] [--summary-format text|json]
//!        [--invalid-file <path>] [--log-format text|json]
//!
//! Unset options fall back to the config file, then to built-in defaults.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

use crate::observability::LogFormat;
use crate::report::SummaryFormat;
use crate::schema::WorldviewSuffixes;

/// recval - validate a batch of user records and report errors by field
#[derive(Parser, Debug, Default)]
#[command(name = "recval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file: a JSON array of user records [default: 19.txt]
    #[arg(long = "input-file", visible_alias = "input_file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Summary output file [default: result.txt]
    #[arg(long = "output-file", visible_alias = "output_file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Print the summary to stdout instead of the output file
    #[arg(long)]
    pub console: bool,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input encoding label [default: utf-8]
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Encoding to retry with when the input is not valid in the primary one
    #[arg(long, value_name = "LABEL")]
    pub fallback_encoding: Option<String>,

    /// Accepted worldview suffix set [default: strict]
    #[arg(long, value_parser = worldview_parser())]
    pub worldview: Option<WorldviewSuffixes>,

    /// Summary format [default: text]
    #[arg(long, value_parser = summary_format_parser())]
    pub summary_format: Option<SummaryFormat>,

    /// Also write one diagnostics line per rejected record to this file
    #[arg(long, value_name = "PATH")]
    pub invalid_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_parser = log_format_parser(), default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

fn worldview_parser() -> impl TypedValueParser<Value = WorldviewSuffixes> {
    PossibleValuesParser::new(["strict", "extended"]).map(|s| match s.as_str() {
        "extended" => WorldviewSuffixes::Extended,
        _ => WorldviewSuffixes::Strict,
    })
}

fn summary_format_parser() -> impl TypedValueParser<Value = SummaryFormat> {
    PossibleValuesParser::new(["text", "json"]).map(|s| match s.as_str() {
        "json" => SummaryFormat::Json,
        _ => SummaryFormat::Text,
    })
}

fn log_format_parser() -> impl TypedValueParser<Value = LogFormat> {
    PossibleValuesParser::new(["text", "json"]).map(|s| match s.as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Text,
    })
}
