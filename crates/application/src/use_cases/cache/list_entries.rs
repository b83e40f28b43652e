use crate::cache::CacheIndex;
use cinder_cdn_domain::CachedObjectEntry;
use std::sync::Arc;

const MAX_PAGE_SIZE: usize = 500;

pub struct ListCacheEntriesUseCase {
    index: Arc<CacheIndex>,
}

impl ListCacheEntriesUseCase {
    pub fn new(index: Arc<CacheIndex>) -> Self {
        Self { index }
    }

    /// Stable page ordered by key plus the total matching count.
    pub fn execute(
        &self,
        bucket: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> (Vec<CachedObjectEntry>, usize) {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        self.index.list(bucket, limit, offset)
    }
}
