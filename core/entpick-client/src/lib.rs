//! Remote service client for EntPick.
//!
//! Everything that talks to the network lives here, behind two async
//! traits:
//! - [`MetadataService`] — fetches the entity catalog / one entity's schema
//! - [`QueryExecutor`] — runs a built query string and returns the rows
//!
//! [`HttpEntityService`] implements both against the remote's HTTP API;
//! [`service::mock::MockService`] implements both in memory for tests.
//! [`EntityPicker`] ties a metadata source, a query executor and a
//! `SearchQuery` together into one search session.

mod config;
mod error;
mod http;
mod picker;
pub mod service;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpEntityService;
pub use picker::EntityPicker;
pub use service::{MetadataService, QueryExecutor};
