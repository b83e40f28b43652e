use crate::cache_entry::CachedObjectEntry;
use serde::Serialize;

/// Totals reported by the external file metadata store.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FileTotals {
    pub total_files: u64,
    pub total_bytes: u64,
    pub image_files: u64,
    pub video_files: u64,
}

/// Dashboard overview combining metadata totals, index state and bandwidth.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheOverview {
    pub files: FileTotals,
    pub cached_entries: u64,
    pub cached_bytes: u64,
    /// Total hits / (hits + misses) across the index, 0–100. Zero when idle.
    pub hit_ratio: f64,
    pub bandwidth_last_24h_gb: f64,
}

/// One row of the top-files ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopFile {
    pub key: String,
    pub downloads: u64,
    pub bytes_served: u64,
}

/// Bounded snapshots for the cache-performance panel.
#[derive(Debug, Clone, Serialize)]
pub struct CachePerformance {
    /// Most-hit cached entries, hit count descending.
    pub top_hits: Vec<CachedObjectEntry>,
    /// Entries with the most recent misses, newest first.
    pub recent_misses: Vec<CachedObjectEntry>,
}
