//! Service trait abstractions.
//!
//! Defines the two external collaborators of the query core — the metadata
//! source and the query execution sink — so the session logic works with
//! any backend.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use entpick_model::{EntityCatalog, EntityMeta, ResultSet};

/// Supplies entity metadata from the remote service.
#[async_trait]
pub trait MetadataService: Send + Sync {
    /// Fetches the full entity catalog.
    async fn fetch_catalog(&self) -> ClientResult<EntityCatalog>;

    /// Fetches the metadata of one entity type.
    async fn fetch_entity(&self, entity_type: &str) -> ClientResult<EntityMeta> {
        let catalog = self.fetch_catalog().await?;
        catalog
            .entity(entity_type)
            .cloned()
            .ok_or_else(|| ClientError::UnknownEntity(entity_type.to_string()))
    }
}

/// Executes a built query string against the remote service.
///
/// The session/user identifier is an explicit parameter — there is no
/// ambient identity lookup.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str, user: &str) -> ClientResult<ResultSet>;
}

/// In-memory implementations for testing.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A mock metadata source + query executor over preloaded data.
    ///
    /// Executed queries are recorded for assertions; queued results are
    /// consumed in order, and an empty queue yields empty result sets.
    #[derive(Debug, Default)]
    pub struct MockService {
        catalog: Mutex<Option<EntityCatalog>>,
        results: Mutex<VecDeque<ClientResult<ResultSet>>>,
        executed: Mutex<Vec<(String, String)>>,
    }

    impl MockService {
        pub fn new() -> Self {
            Self::default()
        }

        /// Preloads the catalog returned by `fetch_catalog`.
        pub fn set_catalog(&self, catalog: EntityCatalog) {
            *self.catalog.lock().unwrap() = Some(catalog);
        }

        /// Drops the catalog; subsequent fetches fail like a dead remote.
        pub fn clear_catalog(&self) {
            *self.catalog.lock().unwrap() = None;
        }

        /// Queues a result set for the next `execute` call.
        pub fn queue_result(&self, result: ResultSet) {
            self.results.lock().unwrap().push_back(Ok(result));
        }

        /// Queues an error for the next `execute` call.
        pub fn queue_error(&self, error: ClientError) {
            self.results.lock().unwrap().push_back(Err(error));
        }

        /// The `(sql, user)` pairs executed so far, in order.
        pub fn executed(&self) -> Vec<(String, String)> {
            self.executed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MetadataService for MockService {
        async fn fetch_catalog(&self) -> ClientResult<EntityCatalog> {
            self.catalog
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| ClientError::Network("no catalog loaded".to_string()))
        }
    }

    #[async_trait]
    impl QueryExecutor for MockService {
        async fn execute(&self, sql: &str, user: &str) -> ClientResult<ResultSet> {
            self.executed
                .lock()
                .unwrap()
                .push((sql.to_string(), user.to_string()));
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(ResultSet::default()))
        }
    }
}
