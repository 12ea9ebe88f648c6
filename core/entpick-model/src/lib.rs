//! Core data model for EntPick.
//!
//! Defines the wire-faithful types shared by the query builder and the
//! transport layer:
//! - [`EntityMeta`] / [`FieldMeta`] / [`FieldType`] — the schema the remote
//!   service declares for each entity type
//! - [`EntityCatalog`] — the full metadata payload (every entity at once)
//! - [`FieldValue`] — a typed scalar entered into one search field
//! - [`ResultSet`] / [`SqlResponse`] — the tabular result and the
//!   success/error envelope the query endpoint returns
//!
//! These types are consumed by `entpick-query` (pure query assembly) and
//! `entpick-client` (HTTP transport). They carry no behavior beyond
//! lookups and serde mappings.

mod meta;
mod result;
mod value;

pub use meta::{EntityCatalog, EntityMeta, FieldMeta, FieldType};
pub use result::{ErrorPayload, ResultSet, Row, SqlResponse};
pub use value::FieldValue;
