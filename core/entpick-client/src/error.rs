//! Error types for the client layer.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The remote reported an error payload.
    #[error("remote error: {0}")]
    Remote(String),

    /// The catalog has no entity of the requested type.
    #[error("unknown entity type: {0}")]
    UnknownEntity(String),

    /// Query assembly failed.
    #[error(transparent)]
    Query(#[from] entpick_query::QueryError),
}
