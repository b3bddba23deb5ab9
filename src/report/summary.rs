//! Error summary rendering
//!
//! Text layout:
//!
//! ```text
//! Invalid records: 3
//! email	1
//! height	0
//! ...
//! address	0
//! ```
//!
//! A `<missing-field>` line follows only when malformed entries were seen.

use std::fmt;
use std::io::{self, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::batch::{BatchReport, ErrorAggregate, MALFORMED_LABEL};

/// Summary output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(serde::Serialize)]
struct SummaryView<'a> {
    total: usize,
    valid: usize,
    total_invalid: usize,
    fields: FieldCounts<'a>,
    malformed: usize,
}

/// Field counters as a JSON object in table order
struct FieldCounts<'a>(&'a ErrorAggregate);

impl Serialize for FieldCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(crate::schema::Field::COUNT))?;
        for (field, count) in self.0.iter() {
            map.serialize_entry(field.as_str(), &count)?;
        }
        map.end()
    }
}

/// Writes the error summary for a batch.
pub fn write_summary<W: Write>(
    writer: &mut W,
    report: &BatchReport,
    format: SummaryFormat,
) -> io::Result<()> {
    match format {
        SummaryFormat::Text => write_text(writer, report.aggregate()),
        SummaryFormat::Json => {
            let aggregate = report.aggregate();
            let view = SummaryView {
                total: report.total(),
                valid: report.valid().len(),
                total_invalid: aggregate.total_invalid(),
                fields: FieldCounts(aggregate),
                malformed: aggregate.malformed(),
            };
            serde_json::to_writer_pretty(&mut *writer, &view)?;
            writeln!(writer)
        }
    }
}

fn write_text<W: Write>(writer: &mut W, aggregate: &ErrorAggregate) -> io::Result<()> {
    writeln!(writer, "Invalid records: {}", aggregate.total_invalid())?;
    for (field, count) in aggregate.iter() {
        writeln!(writer, "{}\t{}", field, count)?;
    }
    if aggregate.malformed() > 0 {
        writeln!(writer, "{}\t{}", MALFORMED_LABEL, aggregate.malformed())?;
    }
    Ok(())
}

/// Renders the summary into a string.
pub fn render_summary(report: &BatchReport, format: SummaryFormat) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_summary(&mut buffer, report, format)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
