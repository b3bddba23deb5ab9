//! Field and rule type definitions
//!
//! A user record has exactly nine fields. Each field is checked by one rule:
//! - pattern: regular expression over the raw string value
//! - float range: parse as `f64`, strict bounds on both ends
//! - int range: parse as `i64`, inclusive lower bound, exclusive upper bound

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Record fields in rule-table order.
///
/// The order is significant: the validator stops at the first failing field,
/// so it decides which field is reported for records with several violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Height,
    Snils,
    PassportSeries,
    Occupation,
    Age,
    AcademicDegree,
    Worldview,
    Address,
}

impl Field {
    /// Number of fields in a record
    pub const COUNT: usize = 9;

    /// All fields in table order
    pub const ALL: [Field; Field::COUNT] = [
        Field::Email,
        Field::Height,
        Field::Snils,
        Field::PassportSeries,
        Field::Occupation,
        Field::Age,
        Field::AcademicDegree,
        Field::Worldview,
        Field::Address,
    ];

    /// Returns the JSON key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Height => "height",
            Field::Snils => "snils",
            Field::PassportSeries => "passport_series",
            Field::Occupation => "occupation",
            Field::Age => "age",
            Field::AcademicDegree => "academic_degree",
            Field::Worldview => "worldview",
            Field::Address => "address",
        }
    }

    /// Position of this field in the rule table
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up a field by its JSON key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepted suffix set for the `worldview` field.
///
/// Two variants of the rule exist in the field data this tool was built for;
/// `Strict` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldviewSuffixes {
    /// `-изм` or `-анство`
    #[default]
    Strict,
    /// `-изм`, `-анство` or `-ам`
    Extended,
}

impl WorldviewSuffixes {
    /// Returns the anchored pattern for this suffix set
    pub fn pattern(&self) -> &'static str {
        match self {
            WorldviewSuffixes::Strict => r"^.+(?:изм|анство)$",
            WorldviewSuffixes::Extended => r"^.+(?:изм|анство|ам)$",
        }
    }
}

impl fmt::Display for WorldviewSuffixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldviewSuffixes::Strict => write!(f, "strict"),
            WorldviewSuffixes::Extended => write!(f, "extended"),
        }
    }
}

/// A single field predicate.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regular expression match. Anchoring is part of the pattern itself;
    /// a pattern without a trailing `$` accepts any suffix after a match.
    Pattern(Regex),
    /// Floating point value with `min < value < max`
    FloatRange { min: f64, max: f64 },
    /// Integer value with `min <= value < max`
    IntRange { min: i64, max: i64 },
}

impl Rule {
    /// Applies the rule to a raw field value.
    ///
    /// Parse failures of numeric rules count as violations.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Pattern(re) => re.is_match(value),
            Rule::FloatRange { min, max } => match value.trim().parse::<f64>() {
                Ok(v) => *min < v && v < *max,
                Err(_) => false,
            },
            Rule::IntRange { min, max } => match value.trim().parse::<i64>() {
                Ok(v) => *min <= v && v < *max,
                Err(_) => false,
            },
        }
    }

    /// Short description used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            Rule::Pattern(re) => format!("matches /{}/", re.as_str()),
            Rule::FloatRange { min, max } => format!("number in ({}, {})", min, max),
            Rule::IntRange { min, max } => format!("integer in [{}, {})", min, max),
        }
    }
}
