use serde::{Deserialize, Serialize};

/// Configuration for the HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote service (e.g. `http://localhost:8080`).
    pub base_url: String,
    /// Path prefix all API endpoints share.
    pub api_prefix: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_prefix: "/cosyan".to_string(),
            timeout_secs: 30,
        }
    }
}
