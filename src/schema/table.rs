//! The field rule table
//!
//! Nine (field, rule) pairs in fixed order. Built once and shared read-only;
//! a table carries no state between validations.

use regex::Regex;

use super::errors::{SchemaError, SchemaResult};
use super::types::{Field, Rule, WorldviewSuffixes};

/// `local@domain.tld`. No end anchor: trailing text after a full address is accepted.
const EMAIL_PATTERN: &str = r"^[^\s@]+@([^\s@.,]+\.)+[^\s@.,]{2,}";
const SNILS_PATTERN: &str = r"^\d{11}$";
const PASSPORT_SERIES_PATTERN: &str = r"^\d{2} \d{2}$";
const OCCUPATION_PATTERN: &str = r"^[a-zA-Zа-яА-Я -]+$";
/// Prefix match on a degree name. The trailing `$` alternative admits the empty
/// string only; any other non-degree value is rejected.
const ACADEMIC_DEGREE_PATTERN: &str =
    r"^(?:Бакалавр|Кандидат наук|Специалист|Магистр|Доктор наук|$)";
/// Street then house number. No end anchor, same as email.
const ADDRESS_PATTERN: &str = r"^[\wа-яА-Я\s.\d-]* \d+";

const HEIGHT_MIN: f64 = 1.1;
const HEIGHT_MAX: f64 = 3.0;
const AGE_MIN: i64 = 18;
const AGE_MAX: i64 = 110;

/// Ordered mapping from field to rule.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<(Field, Rule)>,
    worldview: WorldviewSuffixes,
}

impl RuleTable {
    /// Builds the standard table with the given worldview suffix set.
    pub fn new(worldview: WorldviewSuffixes) -> SchemaResult<Self> {
        let mut rules = Vec::with_capacity(Field::COUNT);

        for field in Field::ALL {
            let rule = match field {
                Field::Email => pattern(field, EMAIL_PATTERN)?,
                Field::Height => Rule::FloatRange {
                    min: HEIGHT_MIN,
                    max: HEIGHT_MAX,
                },
                Field::Snils => pattern(field, SNILS_PATTERN)?,
                Field::PassportSeries => pattern(field, PASSPORT_SERIES_PATTERN)?,
                Field::Occupation => pattern(field, OCCUPATION_PATTERN)?,
                Field::Age => Rule::IntRange {
                    min: AGE_MIN,
                    max: AGE_MAX,
                },
                Field::AcademicDegree => pattern(field, ACADEMIC_DEGREE_PATTERN)?,
                Field::Worldview => pattern(field, worldview.pattern())?,
                Field::Address => pattern(field, ADDRESS_PATTERN)?,
            };
            rules.push((field, rule));
        }

        Ok(Self { rules, worldview })
    }

    /// Builds the standard table with the default worldview suffixes.
    pub fn standard() -> SchemaResult<Self> {
        Self::new(WorldviewSuffixes::default())
    }

    /// Iterates rules in table order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Rule)> {
        self.rules.iter().map(|(field, rule)| (*field, rule))
    }

    /// Returns the rule for a field
    pub fn rule(&self, field: Field) -> &Rule {
        &self.rules[field.index()].1
    }

    /// Checks a single value against its field's rule
    pub fn check(&self, field: Field, value: &str) -> bool {
        self.rule(field).check(value)
    }

    /// Returns the worldview variant this table was built with
    pub fn worldview(&self) -> WorldviewSuffixes {
        self.worldview
    }
}

fn pattern(field: Field, source: &str) -> SchemaResult<Rule> {
    Regex::new(source)
        .map(Rule::Pattern)
        .map_err(|source| SchemaError::InvalidPattern { field, source })
}
