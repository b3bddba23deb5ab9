//! User record
//!
//! A record holds the nine field values as strings, exactly as they will be
//! checked. Numeric JSON values are converted to their JSON text at the
//! boundary. Records are immutable once built.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Number, Value};

use super::errors::{RecordError, RecordResult};
use crate::schema::Field;

/// One user's nine field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: [String; Field::COUNT],
}

impl Record {
    /// Builds a record from values in table order.
    pub fn new(values: [String; Field::COUNT]) -> Self {
        Self { values }
    }

    /// Converts one JSON entry into a record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if:
    /// - the entry is not an object
    /// - a field is missing
    /// - a field is neither a string nor a number
    ///
    /// Fields are checked in table order; the first problem is reported.
    /// Extra keys are ignored.
    pub fn from_value(value: &Value) -> RecordResult<Self> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject {
            found: json_type_name(value),
        })?;
        Self::from_object(obj)
    }

    /// Converts a JSON object into a record.
    pub fn from_object(obj: &Map<String, Value>) -> RecordResult<Self> {
        let mut values: [String; Field::COUNT] = Default::default();

        for field in Field::ALL {
            let raw = obj
                .get(field.as_str())
                .ok_or(RecordError::MissingField(field))?;

            values[field.index()] = match raw {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(RecordError::InvalidType {
                        field,
                        found: json_type_name(other),
                    })
                }
            };
        }

        Ok(Self { values })
    }

    /// Returns the value of a field
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Iterates (field, value) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn email(&self) -> &str {
        self.get(Field::Email)
    }

    pub fn height(&self) -> &str {
        self.get(Field::Height)
    }

    pub fn age(&self) -> &str {
        self.get(Field::Age)
    }
}

impl TryFrom<&Value> for Record {
    type Error = RecordError;

    fn try_from(value: &Value) -> RecordResult<Self> {
        Record::from_value(value)
    }
}

/// Serializes the nine fields in table order.
///
/// `height` and `age` are written as JSON numbers when their text is exactly
/// a number literal, keeping the text as it was given (`1.80` stays `1.80`).
/// Anything else, including padded text, is written as a string.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", Field::COUNT)?;
        for (field, value) in self.iter() {
            match field {
                Field::Height | Field::Age => match as_json_number(value) {
                    Some(n) => state.serialize_field(field.as_str(), &n)?,
                    None => state.serialize_field(field.as_str(), value)?,
                },
                _ => state.serialize_field(field.as_str(), value)?,
            }
        }
        state.end()
    }
}

fn as_json_number(text: &str) -> Option<Box<RawValue>> {
    if text.trim() != text || serde_json::from_str::<Number>(text).is_err() {
        return None;
    }
    RawValue::from_string(text.to_owned()).ok()
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
