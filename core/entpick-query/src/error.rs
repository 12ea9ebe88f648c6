//! Error types for query assembly.

use crate::format::FormatError;
use thiserror::Error;

/// Result type for query builder operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while deriving fields or assembling a query.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    /// An operation was invoked before `initialize`.
    #[error("search query is not initialized")]
    NotInitialized,

    /// The supplied entity metadata is unusable.
    #[error("malformed entity metadata: {0}")]
    Metadata(String),

    /// The named field is not part of the current searchable set.
    #[error("unknown or non-searchable field: {0}")]
    UnknownField(String),

    /// A value could not be rendered for its declared field type.
    #[error(transparent)]
    Format(#[from] FormatError),
}
