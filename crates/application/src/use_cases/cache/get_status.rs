use crate::cache::CacheIndex;
use cinder_cdn_domain::{CachedObjectEntry, ObjectKey};
use std::sync::Arc;

pub struct GetCacheStatusUseCase {
    index: Arc<CacheIndex>,
}

impl GetCacheStatusUseCase {
    pub fn new(index: Arc<CacheIndex>) -> Self {
        Self { index }
    }

    pub fn execute(&self, key: &ObjectKey) -> Option<CachedObjectEntry> {
        self.index.entry(key)
    }
}
