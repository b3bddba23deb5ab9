//! Rejected-records diagnostics
//!
//! One JSON object per line. `violation` is the counted violation;
//! `failing_fields` lists every field that failed, in table order.

use std::io::{self, Write};

use serde::Serialize;

use crate::batch::Rejection;
use crate::schema::Field;

#[derive(Serialize)]
struct RejectionLine {
    index: usize,
    violation: &'static str,
    failing_fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&Rejection> for RejectionLine {
    fn from(rejection: &Rejection) -> Self {
        Self {
            index: rejection.index,
            violation: rejection.violation.label(),
            failing_fields: rejection.failing_fields.iter().map(Field::as_str).collect(),
            error: rejection.error.as_ref().map(|e| e.to_string()),
        }
    }
}

/// Writes one diagnostics line per rejected entry.
pub fn write_rejections<W: Write>(writer: &mut W, rejections: &[Rejection]) -> io::Result<()> {
    for rejection in rejections {
        serde_json::to_writer(&mut *writer, &RejectionLine::from(rejection))?;
        writeln!(writer)?;
    }
    Ok(())
}
