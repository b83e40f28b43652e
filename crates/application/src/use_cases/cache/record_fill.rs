use crate::cache::CacheIndex;
use cinder_cdn_domain::ObjectKey;
use std::sync::Arc;
use tracing::instrument;

/// Entry point for the serving path's fill notifications.
pub struct RecordFillUseCase {
    index: Arc<CacheIndex>,
}

impl RecordFillUseCase {
    pub fn new(index: Arc<CacheIndex>) -> Self {
        Self { index }
    }

    #[instrument(skip(self), fields(key = %key))]
    pub async fn execute(&self, key: ObjectKey, size_bytes: u64) {
        self.index.record_fill(key, size_bytes).await;
    }
}
