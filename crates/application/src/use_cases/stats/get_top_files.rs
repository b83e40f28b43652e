use crate::ports::FileMetadataStore;
use cinder_cdn_domain::{DomainError, TopFile};
use std::sync::Arc;
use tracing::instrument;

const MAX_LIMIT: u32 = 100;

/// Top files by download count, with a deterministic tie-break so repeated
/// calls over unchanged data return the same order.
pub struct GetTopFilesUseCase {
    metadata: Arc<dyn FileMetadataStore>,
}

impl GetTopFilesUseCase {
    pub fn new(metadata: Arc<dyn FileMetadataStore>) -> Self {
        Self { metadata }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, limit: u32) -> Result<Vec<TopFile>, DomainError> {
        let limit = limit.clamp(1, MAX_LIMIT);
        let mut files = self.metadata.top_files(limit).await?;

        files.sort_by(|a, b| {
            b.downloads
                .cmp(&a.downloads)
                .then_with(|| b.bytes_served.cmp(&a.bytes_served))
                .then_with(|| a.key.cmp(&b.key))
        });
        files.truncate(limit as usize);

        Ok(files)
    }
}
