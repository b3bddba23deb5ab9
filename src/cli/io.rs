//! File I/O for the CLI
//!
//! - Input: one JSON array of objects, read fully before validation starts
//! - Outputs: written only after the whole batch has been classified

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use encoding_rs::Encoding;
use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::record::json_type_name;

/// Reads and parses the input batch.
///
/// # Errors
///
/// - `InputNotFound` if the path does not exist
/// - `InputUnreadable` if it cannot be read or decoded
/// - `InputMalformed` if it is not a JSON array of objects
pub fn read_records(
    path: &Path,
    encoding: &'static Encoding,
    fallback: Option<&'static Encoding>,
) -> CliResult<Vec<Value>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::InputNotFound(path.to_path_buf()),
        _ => CliError::input_unreadable(path, e.to_string()),
    })?;

    let text = decode(&bytes, encoding, fallback)
        .ok_or_else(|| CliError::input_unreadable(path, undecodable_reason(encoding, fallback)))?;

    parse_records(&text).map_err(|reason| CliError::input_malformed(path, reason))
}

/// Decodes input bytes, retrying with the fallback encoding on malformed input.
///
/// A byte order mark, if present, takes precedence over both encodings.
pub fn decode(
    bytes: &[u8],
    encoding: &'static Encoding,
    fallback: Option<&'static Encoding>,
) -> Option<String> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if !had_errors {
        return Some(text.into_owned());
    }

    let fallback = fallback?;
    tracing::warn!(
        primary = used.name(),
        fallback = fallback.name(),
        "input is not valid in primary encoding, retrying"
    );
    let (text, _, had_errors) = fallback.decode(bytes);
    (!had_errors).then(|| text.into_owned())
}

fn undecodable_reason(encoding: &'static Encoding, fallback: Option<&'static Encoding>) -> String {
    match fallback {
        Some(fb) => format!("not valid {} or {}", encoding.name(), fb.name()),
        None => format!("not valid {}", encoding.name()),
    }
}

/// Parses decoded input into a list of JSON objects.
pub fn parse_records(text: &str) -> Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| format!("invalid JSON: {}", e))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(format!(
                "expected an array of records, got {}",
                json_type_name(&other)
            ))
        }
    };

    if let Some((i, entry)) = entries.iter().enumerate().find(|(_, e)| !e.is_object()) {
        return Err(format!(
            "entry {} is {}, expected an object",
            i,
            json_type_name(entry)
        ));
    }

    Ok(entries)
}

/// Creates `path` and hands a buffered writer to `render`.
pub fn write_file<F>(path: &Path, render: F) -> CliResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| CliError::output_write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| CliError::output_write_failure(path, e))
}

/// Hands a locked stdout to `render`.
pub fn write_stdout<F>(render: F) -> CliResult<()>
where
    F: FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>,
{
    let mut stdout = io::stdout().lock();
    render(&mut stdout)
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::output_write_failure(Path::new("<stdout>"), e))
}
