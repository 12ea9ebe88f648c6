//! HTTP implementation of the service traits.
//!
//! Talks to the remote's two endpoints:
//! - `GET {prefix}/entityMeta` — the entity catalog
//! - `GET {prefix}/sql?sql=<query>&user=<token>` — query execution
//!
//! The remote signals query failures with a non-2xx status and an
//! `{"error": ...}` body; both are mapped to [`ClientError::Remote`].

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::service::{MetadataService, QueryExecutor};
use async_trait::async_trait;
use entpick_model::{EntityCatalog, ResultSet, SqlResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Reqwest-backed metadata source and query executor.
pub struct HttpEntityService {
    config: ClientConfig,
    client: Client,
}

impl HttpEntityService {
    /// Creates a new HTTP service instance.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_prefix,
            path
        )
    }
}

#[async_trait]
impl MetadataService for HttpEntityService {
    async fn fetch_catalog(&self) -> ClientResult<EntityCatalog> {
        let url = self.endpoint("/entityMeta");
        debug!(%url, "fetching entity catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("metadata fetch failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Remote(format!("HTTP {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("malformed catalog: {e}")))
    }
}

#[async_trait]
impl QueryExecutor for HttpEntityService {
    async fn execute(&self, sql: &str, user: &str) -> ClientResult<ResultSet> {
        let url = self.endpoint("/sql");
        debug!(%sql, user, "executing query");

        let response = self
            .client
            .get(&url)
            .query(&[("sql", sql), ("user", user)])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("query request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("query response lost: {e}")))?;

        let envelope: SqlResponse = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Remote(format!("HTTP {status}: {body}")));
            }
            Err(e) => return Err(ClientError::Decode(format!("malformed response: {e}"))),
        };

        if let Some(error) = envelope.error {
            return Err(ClientError::Remote(error.message().to_string()));
        }

        // a single select arrives as a one-element result array
        envelope
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ClientError::Decode("response carried no result".to_string()))
    }
}
