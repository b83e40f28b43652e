use crate::cache::CacheIndex;
use crate::ports::BandwidthRepository;
use chrono::Utc;
use cinder_cdn_domain::{DomainError, ObjectKey};
use std::sync::Arc;
use tracing::instrument;

/// Records a cache miss (request served from origin) and accounts the bytes.
pub struct RecordMissUseCase {
    index: Arc<CacheIndex>,
    bandwidth: Arc<dyn BandwidthRepository>,
}

impl RecordMissUseCase {
    pub fn new(index: Arc<CacheIndex>, bandwidth: Arc<dyn BandwidthRepository>) -> Self {
        Self { index, bandwidth }
    }

    #[instrument(skip(self), fields(key = %key))]
    pub async fn execute(&self, key: ObjectKey, bytes_served: u64) -> Result<(), DomainError> {
        self.index.record_miss(&key)?;
        self.bandwidth
            .record_traffic(Utc::now(), bytes_served, false)
            .await
    }
}
