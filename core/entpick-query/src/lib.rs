//! Metadata-driven search query builder.
//!
//! This crate is the heart of EntPick: it interprets an entity's field
//! metadata to derive the set of searchable fields, holds the typed filter
//! values a user enters, and assembles them into a query string the remote
//! service accepts:
//!
//! ```text
//! select * from <entity>[ where <field>=<literal>[ and <field>=<literal>]*];
//! ```
//!
//! All operations are pure, synchronous computations over in-memory state —
//! fetching metadata and executing queries belong to `entpick-client`.
//!
//! # Example
//!
//! ```
//! use entpick_model::{EntityMeta, FieldMeta};
//! use entpick_query::SearchQuery;
//!
//! let meta = EntityMeta {
//!     name: "user".to_string(),
//!     fields: vec![
//!         FieldMeta::integer("id", true),
//!         FieldMeta::string("email", true),
//!         FieldMeta::boolean("active", false),
//!     ],
//! };
//!
//! let mut query = SearchQuery::new();
//! query.initialize(meta).unwrap();
//! query.set_value("email", "a@b.com".into()).unwrap();
//! assert_eq!(
//!     query.build().unwrap(),
//!     "select * from user where email='a@b.com';"
//! );
//! ```

mod error;
mod format;
mod search;

pub use error::{QueryError, QueryResult};
pub use format::{literal, FormatError};
pub use search::{SearchField, SearchQuery};
