use std::sync::atomic::{AtomicU64, Ordering};

/// Index-wide counters, updated lock-free from the serving path.
#[derive(Debug, Default)]
pub struct IndexMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub fills: AtomicU64,
    pub removals: AtomicU64,
}

impl IndexMetrics {
    /// Hit ratio over all recorded traffic, 0–100. Zero when idle, never NaN.
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }

    /// Reset traffic counters; used by the whole-index clear.
    pub(crate) fn reset_traffic(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
