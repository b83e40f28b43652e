use crate::ports::BandwidthRepository;
use chrono::{TimeDelta, Utc};
use cinder_cdn_domain::DomainError;
use std::sync::Arc;
use tracing::instrument;

/// Drops bandwidth hours older than the retention window.
pub struct PruneBandwidthSamplesUseCase {
    bandwidth: Arc<dyn BandwidthRepository>,
}

impl PruneBandwidthSamplesUseCase {
    pub fn new(bandwidth: Arc<dyn BandwidthRepository>) -> Self {
        Self { bandwidth }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, retention_days: u32) -> Result<u64, DomainError> {
        let cutoff = Utc::now() - TimeDelta::days(retention_days as i64);
        self.bandwidth.prune_older_than(cutoff).await
    }
}
