use serde::{Deserialize, Serialize};

/// Purge execution limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PurgeConfig {
    /// Maximum in-flight external deletions during a bucket purge.
    #[serde(default = "default_bucket_concurrency")]
    pub bucket_concurrency: usize,

    /// Per-call deadline for the external deleter.
    #[serde(default = "default_delete_timeout_ms")]
    pub delete_timeout_ms: u64,

    /// Retries after the first failed/timed-out delete attempt.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Base backoff between retries; each retry doubles it, with jitter.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            bucket_concurrency: default_bucket_concurrency(),
            delete_timeout_ms: default_delete_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

fn default_bucket_concurrency() -> usize {
    8
}

fn default_delete_timeout_ms() -> u64 {
    5_000
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    200
}
