use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::Serialize;

/// Hourly traffic aggregate used by the bandwidth trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandwidthSample {
    /// Hour bucket, truncated to the full hour (UTC).
    pub hour: DateTime<Utc>,
    pub gb_sent: f64,
    /// Hit ratio over this hour's traffic, 0–100. Zero when no traffic.
    pub hit_ratio: f64,
}

impl BandwidthSample {
    pub fn zero(hour: DateTime<Utc>) -> Self {
        Self {
            hour,
            gb_sent: 0.0,
            hit_ratio: 0.0,
        }
    }

    pub fn from_counts(hour: DateTime<Utc>, bytes_sent: u64, hits: u64, misses: u64) -> Self {
        let traffic = hits + misses;
        let hit_ratio = if traffic > 0 {
            (hits as f64 / traffic as f64) * 100.0
        } else {
            0.0
        };
        Self {
            hour,
            gb_sent: bytes_sent as f64 / 1_073_741_824.0,
            hit_ratio,
        }
    }
}

/// Truncates a timestamp to its hour bucket.
pub fn truncate_to_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    // TimeDelta::hours(1) is a valid rounding unit, so this cannot fail.
    at.duration_trunc(TimeDelta::hours(1)).unwrap_or(at)
}
