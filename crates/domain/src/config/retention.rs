use serde::{Deserialize, Serialize};

/// Retention of derived data. Purge records are never pruned.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    /// Days of hourly bandwidth samples to keep (default: 30).
    /// The dashboard chart reads the trailing 7 days.
    #[serde(default = "default_bandwidth_days")]
    pub bandwidth_days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            bandwidth_days: default_bandwidth_days(),
        }
    }
}

fn default_bandwidth_days() -> u32 {
    30
}
