use crate::ports::PurgeLogRepository;
use cinder_cdn_domain::{DomainError, PurgeRecord};
use std::sync::Arc;

const MAX_HISTORY: u32 = 1_000;

/// Read side of the purge audit trail.
pub struct GetPurgeHistoryUseCase {
    purge_log: Arc<dyn PurgeLogRepository>,
}

impl GetPurgeHistoryUseCase {
    pub fn new(purge_log: Arc<dyn PurgeLogRepository>) -> Self {
        Self { purge_log }
    }

    pub async fn execute(&self, limit: u32) -> Result<Vec<PurgeRecord>, DomainError> {
        let limit = limit.clamp(1, MAX_HISTORY);
        self.purge_log.list(limit).await
    }
}
