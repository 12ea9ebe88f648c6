use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One tabular result from the query endpoint: a header row plus value rows.
///
/// Cell values are opaque JSON; the client displays them, it does not
/// interpret them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The rows in result order, each addressable by column name.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.values.iter().map(|values| Row {
            header: &self.header,
            values,
        })
    }
}

/// One result row, a mapping from column name to cell value.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    header: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// The cell under the named column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let index = self.header.iter().position(|h| h == column)?;
        self.values.get(index)
    }

    /// (column, cell) pairs in header order.
    pub fn columns(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.header
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

/// The query endpoint's response envelope.
///
/// Success carries `result` (one `ResultSet` per statement; a single select
/// arrives as a one-element array), failure carries `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct SqlResponse {
    #[serde(default)]
    pub result: Option<Vec<ResultSet>>,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

/// The remote reports errors either as a bare string or as `{"msg": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message(String),
    Detailed { msg: String },
}

impl ErrorPayload {
    pub fn message(&self) -> &str {
        match self {
            ErrorPayload::Message(msg) => msg,
            ErrorPayload::Detailed { msg } => msg,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
