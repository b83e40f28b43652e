use crate::object_key::ObjectKey;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point-in-time view of one cached object.
///
/// The live entry inside the index keeps its counters in atomics; this is the
/// owned snapshot handed to listings, stats and purge accounting.
#[derive(Debug, Clone, Serialize)]
pub struct CachedObjectEntry {
    pub key: ObjectKey,
    pub size_bytes: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub cached_at: DateTime<Utc>,
    pub last_hit_at: Option<DateTime<Utc>>,
    pub last_miss_at: Option<DateTime<Utc>>,
    /// Bumped on every (re)fill; lets a purge detect that a fill raced ahead.
    pub generation: u64,
}
