use async_trait::async_trait;
use cinder_cdn_domain::{DomainError, FileTotals, TopFile};

/// Read-only view of the external file metadata store.
#[async_trait]
pub trait FileMetadataStore: Send + Sync {
    /// Totals across all stored files, split by media type.
    async fn totals(&self) -> Result<FileTotals, DomainError>;

    /// Files by download count. Ordering beyond the count is not guaranteed
    /// by the store; the stats layer applies the deterministic tie-break.
    async fn top_files(&self, limit: u32) -> Result<Vec<TopFile>, DomainError>;
}
