use crate::cache::CacheIndex;
use crate::ports::{BandwidthRepository, FileMetadataStore};
use chrono::{TimeDelta, Utc};
use cinder_cdn_domain::{CacheOverview, DomainError};
use std::sync::Arc;
use tracing::instrument;

/// Dashboard overview: metadata totals, index hit ratio, last-24h bandwidth.
pub struct GetOverviewUseCase {
    index: Arc<CacheIndex>,
    metadata: Arc<dyn FileMetadataStore>,
    bandwidth: Arc<dyn BandwidthRepository>,
}

impl GetOverviewUseCase {
    pub fn new(
        index: Arc<CacheIndex>,
        metadata: Arc<dyn FileMetadataStore>,
        bandwidth: Arc<dyn BandwidthRepository>,
    ) -> Self {
        Self {
            index,
            metadata,
            bandwidth,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<CacheOverview, DomainError> {
        let files = self.metadata.totals().await?;

        let now = Utc::now();
        let bytes_last_24h = self.bandwidth.bytes_sent(now - TimeDelta::hours(24), now).await?;

        let (cached_entries, cached_bytes) = self.index.totals();

        Ok(CacheOverview {
            files,
            cached_entries,
            cached_bytes,
            hit_ratio: self.index.hit_ratio(),
            bandwidth_last_24h_gb: bytes_last_24h as f64 / 1_073_741_824.0,
        })
    }
}
