use async_trait::async_trait;
use cinder_cdn_domain::{DomainError, PurgeRecord};

/// Append-only purge audit trail.
///
/// The interface shape is the guarantee: there is no update and no delete, so
/// a written record can never change.
#[async_trait]
pub trait PurgeLogRepository: Send + Sync {
    /// Appends one record and returns its assigned id.
    async fn append(&self, record: PurgeRecord) -> Result<i64, DomainError>;

    /// Most-recent-first history, ties on `created_at` broken by id
    /// descending (later insertions first).
    async fn list(&self, limit: u32) -> Result<Vec<PurgeRecord>, DomainError>;
}
