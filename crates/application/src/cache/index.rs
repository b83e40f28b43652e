use super::IndexMetrics;
use chrono::{DateTime, TimeZone, Utc};
use cinder_cdn_domain::{CachedObjectEntry, DomainError, ObjectKey};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Live entry stored in the index.
///
/// Counters are atomics so hit/miss recording only takes the shard read lock;
/// `size_bytes`, `generation` and `cached_at` change only under the shard
/// write lock inside `record_fill`.
struct CachedObject {
    size_bytes: u64,
    generation: u64,
    cached_at: DateTime<Utc>,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    // Millis since epoch, 0 = never.
    last_hit_at: AtomicI64,
    last_miss_at: AtomicI64,
}

impl CachedObject {
    fn new(size_bytes: u64) -> Self {
        Self {
            size_bytes,
            generation: 1,
            cached_at: Utc::now(),
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
            last_hit_at: AtomicI64::new(0),
            last_miss_at: AtomicI64::new(0),
        }
    }

    fn refill(&mut self, size_bytes: u64) {
        self.generation += 1;
        self.size_bytes = size_bytes;
        self.cached_at = Utc::now();
    }

    fn snapshot(&self, key: ObjectKey) -> CachedObjectEntry {
        CachedObjectEntry {
            key,
            size_bytes: self.size_bytes,
            hit_count: self.hit_count.load(AtomicOrdering::Relaxed),
            miss_count: self.miss_count.load(AtomicOrdering::Relaxed),
            cached_at: self.cached_at,
            last_hit_at: millis_to_time(self.last_hit_at.load(AtomicOrdering::Relaxed)),
            last_miss_at: millis_to_time(self.last_miss_at.load(AtomicOrdering::Relaxed)),
            generation: self.generation,
        }
    }
}

fn millis_to_time(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        None
    } else {
        Utc.timestamp_millis_opt(millis).single()
    }
}

/// One key of a bucket purge plan, captured at snapshot time.
#[derive(Debug, Clone)]
pub struct PurgePlanEntry {
    pub key: ObjectKey,
    pub generation: u64,
    pub size_bytes: u64,
}

/// Sharded map from object key to cache metadata.
///
/// Concurrency discipline: per-key mutations serialize on the dashmap shard;
/// membership changes (`record_fill`, `remove`) additionally hold the wide
/// gate shared, so a whole-index clear can take it exclusively and observe a
/// stable membership. Hit/miss recording never touches the wide gate.
pub struct CacheIndex {
    entries: DashMap<ObjectKey, CachedObject, FxBuildHasher>,
    wide: RwLock<()>,
    metrics: Arc<IndexMetrics>,
}

impl CacheIndex {
    pub fn new(shards: usize, initial_capacity: usize) -> Self {
        info!(shards, initial_capacity, "Initializing cache index");

        let entries = DashMap::with_capacity_and_hasher_and_shard_amount(
            initial_capacity,
            FxBuildHasher::default(),
            shards,
        );

        Self {
            entries,
            wide: RwLock::new(()),
            metrics: Arc::new(IndexMetrics::default()),
        }
    }

    /// Inserts or refills an entry. A refill bumps the generation, overwrites
    /// the size and resets `cached_at`; counters survive the refill.
    pub async fn record_fill(&self, key: ObjectKey, size_bytes: u64) {
        let _wide = self.wide.read().await;

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.refill(size_bytes);
                let generation = entry.generation;
                debug!(key = %occupied.key(), generation, size_bytes, "Cache refill");
            }
            Entry::Vacant(vacant) => {
                debug!(key = %vacant.key(), size_bytes, "Cache fill");
                vacant.insert(CachedObject::new(size_bytes));
            }
        }

        self.metrics.fills.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Records a hit. Unknown key means the serving path and the index have
    /// desynchronized; surfaced to the caller, index state untouched.
    pub fn record_hit(&self, key: &ObjectKey) -> Result<(), DomainError> {
        match self.entries.get(key) {
            Some(entry) => {
                entry.hit_count.fetch_add(1, AtomicOrdering::Relaxed);
                entry
                    .last_hit_at
                    .store(Utc::now().timestamp_millis(), AtomicOrdering::Relaxed);
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Ok(())
            }
            None => {
                warn!(key = %key, "Hit recorded for unknown cache key");
                Err(DomainError::UnknownKey(key.to_string()))
            }
        }
    }

    pub fn record_miss(&self, key: &ObjectKey) -> Result<(), DomainError> {
        match self.entries.get(key) {
            Some(entry) => {
                entry.miss_count.fetch_add(1, AtomicOrdering::Relaxed);
                entry
                    .last_miss_at
                    .store(Utc::now().timestamp_millis(), AtomicOrdering::Relaxed);
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                Ok(())
            }
            None => {
                warn!(key = %key, "Miss recorded for unknown cache key");
                Err(DomainError::UnknownKey(key.to_string()))
            }
        }
    }

    /// Removes the entry only if its generation still matches.
    ///
    /// `Ok(Some(entry))` — removed, snapshot returned for byte accounting.
    /// `Ok(None)` — key was not cached; a no-op for the caller.
    /// `Err(StaleGeneration)` — a fill raced ahead; the fresher entry stays.
    pub async fn remove(
        &self,
        key: &ObjectKey,
        expected_generation: u64,
    ) -> Result<Option<CachedObjectEntry>, DomainError> {
        let _wide = self.wide.read().await;

        if let Some((removed_key, object)) = self
            .entries
            .remove_if(key, |_, object| object.generation == expected_generation)
        {
            self.metrics.removals.fetch_add(1, AtomicOrdering::Relaxed);
            return Ok(Some(object.snapshot(removed_key)));
        }

        match self.entries.get(key) {
            Some(current) => Err(DomainError::StaleGeneration {
                key: key.to_string(),
                expected: expected_generation,
                current: current.generation,
            }),
            None => Ok(None),
        }
    }

    /// Current snapshot of one entry, for the cache-status endpoint.
    pub fn entry(&self, key: &ObjectKey) -> Option<CachedObjectEntry> {
        self.entries
            .get(key)
            .map(|entry| entry.value().snapshot(entry.key().clone()))
    }

    /// Deterministic page ordered by key. Returns the page and the total
    /// number of matching entries. The scan locks one shard at a time, so
    /// hit/miss recording on other shards is never starved.
    pub fn list(
        &self,
        bucket_filter: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> (Vec<CachedObjectEntry>, usize) {
        let mut snapshots: Vec<CachedObjectEntry> = self
            .entries
            .iter()
            .filter(|entry| bucket_filter.map_or(true, |bucket| entry.key().in_bucket(bucket)))
            .map(|entry| entry.value().snapshot(entry.key().clone()))
            .collect();

        snapshots.sort_by(|a, b| a.key.cmp(&b.key));
        let total = snapshots.len();
        let page = snapshots.into_iter().skip(offset).take(limit).collect();
        (page, total)
    }

    /// Point-in-time purge plan for a bucket. Every key present at scan time
    /// is included; keys filled afterwards are outside this plan.
    pub fn snapshot_for_bucket(&self, bucket: &str) -> Vec<PurgePlanEntry> {
        let mut plan: Vec<PurgePlanEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.key().in_bucket(bucket))
            .map(|entry| PurgePlanEntry {
                key: entry.key().clone(),
                generation: entry.value().generation,
                size_bytes: entry.value().size_bytes,
            })
            .collect();

        plan.sort_by(|a, b| a.key.cmp(&b.key));
        plan
    }

    /// Unordered snapshot of every entry, one shard at a time.
    pub fn snapshot(&self) -> Vec<CachedObjectEntry> {
        self.entries
            .iter()
            .map(|entry| entry.value().snapshot(entry.key().clone()))
            .collect()
    }

    /// Entry count and summed cached bytes.
    pub fn totals(&self) -> (u64, u64) {
        let mut files = 0u64;
        let mut bytes = 0u64;
        for entry in self.entries.iter() {
            files += 1;
            bytes += entry.value().size_bytes;
        }
        (files, bytes)
    }

    /// Takes the wide gate exclusively for a whole-index clear. Fills and
    /// removes queue behind the guard; unrelated hit/miss recording proceeds.
    pub async fn lock_for_clear(&self) -> ClearGuard<'_> {
        ClearGuard {
            index: self,
            _wide: self.wide.write().await,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> Arc<IndexMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn hit_ratio(&self) -> f64 {
        self.metrics.hit_ratio()
    }
}

/// Exclusive hold on the index during `purge_all`.
///
/// While the guard lives, membership cannot change: the captured totals stay
/// accurate until `clear` or drop. Dropping without clearing aborts the
/// operation with the index intact.
pub struct ClearGuard<'a> {
    index: &'a CacheIndex,
    _wide: RwLockWriteGuard<'a, ()>,
}

impl ClearGuard<'_> {
    pub fn totals(&self) -> (u64, u64) {
        self.index.totals()
    }

    /// Bulk reset: drops every entry in one pass and resets traffic counters.
    pub fn clear(self) {
        let removed = self.index.entries.len();
        self.index.entries.clear();
        self.index.entries.shrink_to_fit();
        self.index.metrics.reset_traffic();
        info!(removed, "Cache index cleared");
    }
}
