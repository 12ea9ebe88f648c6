//! Literal rendering for the remote query language.

use entpick_model::{FieldType, FieldValue};
use thiserror::Error;

/// Errors raised when a value cannot be rendered as a query literal.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// The value's runtime shape does not satisfy the declared field type.
    #[error("value {value:?} does not match declared type {expected:?}")]
    TypeMismatch {
        expected: FieldType,
        value: FieldValue,
    },

    /// NaN and infinities have no literal form in the query language.
    #[error("non-finite float has no literal form")]
    NonFiniteFloat,
}

/// Renders one typed value as a literal for the remote query language.
///
/// Numeric and boolean values render canonically, unquoted. Strings and
/// dates render single-quoted; embedded single quotes are doubled so a
/// value can never break out of the literal.
pub fn literal(value: &FieldValue, field_type: FieldType) -> Result<String, FormatError> {
    if !value.matches(field_type) {
        return Err(FormatError::TypeMismatch {
            expected: field_type,
            value: value.clone(),
        });
    }
    match value {
        FieldValue::Text(s) => Ok(quote(s)),
        FieldValue::Integer(i) => Ok(i.to_string()),
        FieldValue::Float(f) if !f.is_finite() => Err(FormatError::NonFiniteFloat),
        // integral floats keep a decimal point so the remote lexes them as floats
        FieldValue::Float(f) if *f == f.trunc() => Ok(format!("{f:.1}")),
        FieldValue::Float(f) => Ok(f.to_string()),
        FieldValue::Boolean(b) => Ok(b.to_string()),
        FieldValue::Date(d) => Ok(format!("'{}'", d.format("%Y-%m-%d"))),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
