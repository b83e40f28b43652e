use chrono::{DateTime, Utc};
use cinder_cdn_domain::CachedObjectEntry;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct CacheEntryResponse {
    pub key: String,
    pub size_bytes: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub cached_at: DateTime<Utc>,
    pub last_hit_at: Option<DateTime<Utc>>,
    pub last_miss_at: Option<DateTime<Utc>>,
    pub generation: u64,
}

impl From<CachedObjectEntry> for CacheEntryResponse {
    fn from(entry: CachedObjectEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            size_bytes: entry.size_bytes,
            hit_count: entry.hit_count,
            miss_count: entry.miss_count,
            cached_at: entry.cached_at,
            last_hit_at: entry.last_hit_at,
            last_miss_at: entry.last_miss_at,
            generation: entry.generation,
        }
    }
}

/// Status lookup for one path: `cached` is false when the entry is absent.
#[derive(Serialize, Debug, Clone)]
pub struct CacheStatusResponse {
    pub path: String,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<CacheEntryResponse>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheListResponse {
    pub entries: Vec<CacheEntryResponse>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Serving-path notification: a fill, hit or miss for one object.
#[derive(Deserialize, Debug, Clone)]
pub struct TrafficEventRequest {
    pub path: String,
    pub bytes: u64,
}
