use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinder_cdn_domain::{BandwidthSample, DomainError};

/// Hourly bandwidth accounting.
///
/// `record_traffic` may buffer internally; readers see flushed hours. Pruning
/// only ever touches bandwidth rows, never the purge log or the index.
#[async_trait]
pub trait BandwidthRepository: Send + Sync {
    /// Accounts one serving event into its hour bucket.
    async fn record_traffic(
        &self,
        at: DateTime<Utc>,
        bytes_sent: u64,
        hit: bool,
    ) -> Result<(), DomainError>;

    /// Samples with traffic inside `[from, to)`, hour ascending. Hours
    /// without traffic are absent; densification is the caller's job.
    async fn range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BandwidthSample>, DomainError>;

    /// Total bytes sent inside `[from, to)`.
    async fn bytes_sent(&self, from: DateTime<Utc>, to: DateTime<Utc>)
        -> Result<u64, DomainError>;

    /// Deletes samples older than `cutoff`; returns how many rows went away.
    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
