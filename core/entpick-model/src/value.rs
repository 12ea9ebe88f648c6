use crate::meta::FieldType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A typed scalar entered into one search field.
///
/// A field with no value set carries `Option<FieldValue>::None` — absence is
/// explicit, so legitimate falsy values (`false`, `0`, `0.0`) are real
/// filters and are never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
}

impl FieldValue {
    /// Whether this value's runtime shape satisfies the declared field type.
    pub fn matches(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (FieldValue::Text(_), FieldType::String)
                | (FieldValue::Integer(_), FieldType::Integer)
                | (FieldValue::Float(_), FieldType::Float)
                | (FieldValue::Boolean(_), FieldType::Boolean)
                | (FieldValue::Date(_), FieldType::Date)
        )
    }

    /// The field type this value naturally satisfies.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::String,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Boolean(_) => FieldType::Boolean,
            FieldValue::Date(_) => FieldType::Date,
        }
    }

    /// An empty string is what a cleared form input produces; it counts as
    /// "no filter". Every other value — including `false` and `0` — is a
    /// real filter.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}
