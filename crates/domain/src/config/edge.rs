use serde::{Deserialize, Serialize};

/// Edge-cache deleter endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeConfig {
    /// Base URL of the edge purge API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8081".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5_000
}
