use crate::cache::CacheIndex;
use cinder_cdn_domain::CachePerformance;
use std::sync::Arc;
use tracing::instrument;

const PANEL_SIZE: usize = 10;

/// Cache-performance panel: most-hit entries and freshest misses. Both are
/// bounded snapshots taken at call time, not live views.
pub struct GetCachePerformanceUseCase {
    index: Arc<CacheIndex>,
}

impl GetCachePerformanceUseCase {
    pub fn new(index: Arc<CacheIndex>) -> Self {
        Self { index }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) -> CachePerformance {
        let entries = self.index.snapshot();

        let mut top_hits = entries.clone();
        top_hits.sort_by(|a, b| {
            b.hit_count
                .cmp(&a.hit_count)
                .then_with(|| a.key.cmp(&b.key))
        });
        top_hits.truncate(PANEL_SIZE);

        let mut recent_misses: Vec<_> = entries
            .into_iter()
            .filter(|entry| entry.last_miss_at.is_some())
            .collect();
        recent_misses.sort_by(|a, b| {
            b.last_miss_at
                .cmp(&a.last_miss_at)
                .then_with(|| a.key.cmp(&b.key))
        });
        recent_misses.truncate(PANEL_SIZE);

        CachePerformance {
            top_hits,
            recent_misses,
        }
    }
}
