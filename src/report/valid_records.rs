//! Valid-records report
//!
//! Each record is written as a numbered header followed by a pretty-printed
//! JSON object with the nine fields in table order:
//!
//! ```text
//! Record 1
//! {
//!   "email": "a@b.co",
//!   "height": 1.80,
//!   ...
//! }
//! ```

use std::io::{self, Write};

use crate::record::Record;

/// Writes all valid records, numbered from 1.
pub fn write_valid_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(writer, "Record {}", i + 1)?;
        serde_json::to_writer_pretty(&mut *writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use serde_json::{json, Value};

    fn record(email: &str) -> Record {
        Record::from_value(&json!({
            "email": email,
            "height": 1.8,
            "snils": "12345678901",
            "passport_series": "12 34",
            "occupation": "Инженер",
            "age": 30,
            "academic_degree": "",
            "worldview": "буддизм",
            "address": "Ленина 5"
        }))
        .unwrap()
    }

    fn render(records: &[Record]) -> String {
        let mut buffer = Vec::new();
        write_valid_records(&mut buffer, records).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_records_are_numbered_from_one() {
        let text = render(&[record("a@b.co"), record("c@d.org")]);
        let first = text.find("Record 1\n").unwrap();
        let second = text.find("Record 2\n").unwrap();
        assert!(first < second);
        assert!(!text.contains("Record 0"));
        assert!(text[second..].contains("c@d.org"));
    }

    #[test]
    fn test_record_body_is_json() {
        let text = render(&[record("a@b.co")]);
        let body = text.strip_prefix("Record 1\n").unwrap();
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed["email"], "a@b.co");
        assert_eq!(parsed["height"], 1.8);
        assert_eq!(parsed["age"], 30);
        assert_eq!(parsed["academic_degree"], "");
        assert_eq!(parsed["address"], "Ленина 5");
    }

    #[test]
    fn test_numeric_text_written_as_given() {
        let base = record("a@b.co");
        let values: Vec<String> = base
            .iter()
            .map(|(field, value)| match field {
                Field::Height => "1.80".to_string(),
                _ => value.to_string(),
            })
            .collect();
        let values: [String; Field::COUNT] = values.try_into().unwrap();
        let text = render(&[Record::new(values)]);
        assert!(text.contains("\"height\": 1.80,"));
        assert!(text.contains("\"age\": 30,"));
    }

    #[test]
    fn test_no_records_writes_nothing() {
        assert!(render(&[]).is_empty());
    }
}
