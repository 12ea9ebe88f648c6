//! The entity search session.
//!
//! An [`EntityPicker`] owns one `SearchQuery` plus the two service
//! collaborators and drives a complete search session: load metadata,
//! enter filter values, execute, read rows. One picker per logical
//! session; it is not meant to be shared across threads.

use crate::error::ClientResult;
use crate::service::{MetadataService, QueryExecutor};
use entpick_model::{EntityMeta, FieldValue, ResultSet};
use entpick_query::{SearchField, SearchQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates metadata loading, filter entry and query execution for
/// one entity type at a time.
///
/// A failed metadata refresh or search leaves previously loaded metadata,
/// field values and results untouched — the error is recorded and the
/// session stays usable.
pub struct EntityPicker {
    metadata: Arc<dyn MetadataService>,
    executor: Arc<dyn QueryExecutor>,
    query: SearchQuery,
    results: Option<ResultSet>,
    last_error: Option<String>,
}

impl EntityPicker {
    pub fn new(metadata: Arc<dyn MetadataService>, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            metadata,
            executor,
            query: SearchQuery::new(),
            results: None,
            last_error: None,
        }
    }

    /// Loads (or reloads) the metadata of one entity type and derives a
    /// fresh search form from it.
    pub async fn load(&mut self, entity_type: &str) -> ClientResult<()> {
        let meta = match self.metadata.fetch_entity(entity_type).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(entity_type, error = %e, "metadata load failed");
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        info!(entity_type, fields = meta.fields.len(), "entity metadata loaded");
        self.query.initialize(meta)?;
        self.results = None;
        self.last_error = None;
        Ok(())
    }

    /// Sets one field's filter value.
    pub fn set_value(&mut self, field: &str, value: FieldValue) -> ClientResult<()> {
        self.query.set_value(field, value)?;
        Ok(())
    }

    /// Clears one field's filter value.
    pub fn clear_value(&mut self, field: &str) -> ClientResult<()> {
        self.query.clear(field)?;
        Ok(())
    }

    /// Clears every filter value, keeping the field set.
    pub fn reset(&mut self) -> ClientResult<()> {
        self.query.reset()?;
        Ok(())
    }

    /// Builds the query from the current filters and executes it as `user`.
    pub async fn search(&mut self, user: &str) -> ClientResult<&ResultSet> {
        let sql = self.query.build()?;
        debug!(%sql, "running entity search");
        let rows = match self.executor.execute(&sql, user).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "entity search failed");
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.last_error = None;
        Ok(&*self.results.insert(rows))
    }

    /// The currently loaded entity metadata.
    pub fn entity(&self) -> Option<&EntityMeta> {
        self.query.meta()
    }

    /// The search form fields, in metadata order.
    pub fn fields(&self) -> &[SearchField] {
        self.query.fields()
    }

    /// The inner query builder.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// The rows of the most recent successful search.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// The message of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
