use crate::cache::{CacheIndex, PurgePlanEntry};
use crate::ports::{BucketRepository, ObjectDeleter, PurgeLogRepository};
use cinder_cdn_domain::config::PurgeConfig;
use cinder_cdn_domain::{DomainError, ObjectKey, PurgeKind, PurgeOutcome, PurgeRecord};
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

/// Result of one key inside a bucket purge.
enum KeyOutcome {
    Purged { bytes: u64 },
    /// Key vanished between plan and removal, or a fill raced ahead.
    Skipped,
    DeleteFailed,
}

/// Translates purge requests into safe index mutations plus external
/// deletions, and appends exactly one audit record per executed request.
pub struct PurgeCoordinator {
    index: Arc<CacheIndex>,
    deleter: Arc<dyn ObjectDeleter>,
    purge_log: Arc<dyn PurgeLogRepository>,
    buckets: Arc<dyn BucketRepository>,
    config: PurgeConfig,
}

impl PurgeCoordinator {
    pub fn new(
        index: Arc<CacheIndex>,
        deleter: Arc<dyn ObjectDeleter>,
        purge_log: Arc<dyn PurgeLogRepository>,
        buckets: Arc<dyn BucketRepository>,
        config: PurgeConfig,
    ) -> Self {
        Self {
            index,
            deleter,
            purge_log,
            buckets,
            config,
        }
    }

    /// Purges a single cached object. Purging a path that is not cached is a
    /// zero-effect success, so the operation is idempotent.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn purge_single(&self, key: ObjectKey) -> Result<PurgeRecord, DomainError> {
        let target = key.to_string();

        let Some(entry) = self.index.entry(&key) else {
            debug!("Purge target not cached, zero-effect success");
            return self
                .log(PurgeRecord::succeeded(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome::default(),
                ))
                .await;
        };

        if let Err(e) = self.delete_with_retry(&key).await {
            warn!(error = %e, "External delete failed, nothing purged");
            return self
                .log(PurgeRecord::failed(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome::default(),
                    e.to_string(),
                ))
                .await;
        }

        match self.index.remove(&key, entry.generation).await {
            Ok(Some(removed)) => {
                info!(bytes_freed = removed.size_bytes, "Purged cached object");
                self.log(PurgeRecord::succeeded(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome {
                        files_purged: 1,
                        bytes_freed: removed.size_bytes,
                    },
                ))
                .await
            }
            Ok(None) => {
                // Another purge beat us to it after the lookup.
                self.log(PurgeRecord::succeeded(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome::default(),
                ))
                .await
            }
            Err(DomainError::StaleGeneration {
                expected, current, ..
            }) => {
                // A fill raced ahead; the fresher entry stays and the object
                // is not counted as purged.
                debug!(expected, current, "Fill raced ahead of purge");
                let mut record = PurgeRecord::succeeded(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome::default(),
                );
                record.error_detail = Some(format!(
                    "refill raced ahead of purge (generation {current} > {expected}); fresher entry kept"
                ));
                self.log(record).await
            }
            Err(e) => {
                error!(error = %e, "Index mutation failed during purge");
                self.log(PurgeRecord::failed(
                    PurgeKind::Single,
                    target,
                    PurgeOutcome::default(),
                    e.to_string(),
                ))
                .await
            }
        }
    }

    /// Purges every object cached under a bucket, in parallel up to the
    /// configured concurrency. Partial failures do not abort the batch;
    /// successfully purged keys stay purged.
    #[instrument(skip(self))]
    pub async fn purge_bucket(&self, bucket: &str) -> Result<PurgeRecord, DomainError> {
        if !self.buckets.exists(bucket).await? {
            debug!("Bucket does not exist, zero-effect success");
            let mut record =
                PurgeRecord::succeeded(PurgeKind::Bucket, bucket, PurgeOutcome::default());
            record.error_detail = Some(format!("bucket {bucket:?} does not exist"));
            return self.log(record).await;
        }

        let plan = self.index.snapshot_for_bucket(bucket);
        let planned = plan.len();
        info!(planned, "Bucket purge plan captured");

        let outcomes: Vec<KeyOutcome> = stream::iter(plan)
            .map(|entry| self.purge_plan_entry(entry))
            .buffer_unordered(self.config.bucket_concurrency)
            .collect()
            .await;

        let mut outcome = PurgeOutcome::default();
        let mut failed = 0u64;
        for key_outcome in outcomes {
            match key_outcome {
                KeyOutcome::Purged { bytes } => {
                    outcome.files_purged += 1;
                    outcome.bytes_freed += bytes;
                }
                KeyOutcome::Skipped => {}
                KeyOutcome::DeleteFailed => failed += 1,
            }
        }

        let record = if failed == 0 {
            PurgeRecord::succeeded(PurgeKind::Bucket, bucket, outcome)
        } else {
            warn!(failed, planned, "Bucket purge completed with failures");
            PurgeRecord::failed(
                PurgeKind::Bucket,
                bucket,
                outcome,
                format!("{failed} of {planned} keys failed external delete"),
            )
        };
        self.log(record).await
    }

    async fn purge_plan_entry(&self, entry: PurgePlanEntry) -> KeyOutcome {
        if let Err(e) = self.delete_with_retry(&entry.key).await {
            warn!(key = %entry.key, error = %e, "External delete failed for plan key");
            return KeyOutcome::DeleteFailed;
        }

        match self.index.remove(&entry.key, entry.generation).await {
            Ok(Some(removed)) => KeyOutcome::Purged {
                bytes: removed.size_bytes,
            },
            Ok(None) => KeyOutcome::Skipped,
            Err(DomainError::StaleGeneration { .. }) => {
                debug!(key = %entry.key, "Fill raced ahead during bucket purge");
                KeyOutcome::Skipped
            }
            Err(e) => {
                error!(key = %entry.key, error = %e, "Index mutation failed during bucket purge");
                KeyOutcome::DeleteFailed
            }
        }
    }

    /// Clears the whole cache. Requires explicit confirmation; without it the
    /// request is rejected before any mutation and no record is written.
    #[instrument(skip(self))]
    pub async fn purge_all(&self, confirmed: bool) -> Result<PurgeRecord, DomainError> {
        if !confirmed {
            return Err(DomainError::InvalidConfirmation);
        }

        let guard = self.index.lock_for_clear().await;
        let (files, bytes) = guard.totals();
        info!(files, bytes, "Clearing entire cache");

        match self
            .with_retry("clear_all", || self.deleter.clear_all())
            .await
        {
            Ok(()) => {
                guard.clear();
                self.log(PurgeRecord::succeeded(
                    PurgeKind::All,
                    "",
                    PurgeOutcome {
                        files_purged: files,
                        bytes_freed: bytes,
                    },
                ))
                .await
            }
            Err(e) => {
                // Drop the guard without clearing: index stays intact.
                drop(guard);
                error!(error = %e, "External clear failed, cache left intact");
                self.log(PurgeRecord::failed(
                    PurgeKind::All,
                    "",
                    PurgeOutcome::default(),
                    e.to_string(),
                ))
                .await
            }
        }
    }

    /// Most-recent-first purge history.
    pub async fn history(&self, limit: u32) -> Result<Vec<PurgeRecord>, DomainError> {
        self.purge_log.list(limit).await
    }

    async fn delete_with_retry(&self, key: &ObjectKey) -> Result<(), DomainError> {
        self.with_retry("delete", || self.deleter.delete(key)).await
    }

    /// Bounded retries with doubling, jittered backoff. Timeouts count as
    /// failed attempts; exhaustion surfaces the last error.
    async fn with_retry<F, Fut>(&self, op: &str, call: F) -> Result<(), DomainError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<(), DomainError>>,
    {
        let deadline = Duration::from_millis(self.config.delete_timeout_ms);
        let mut last_error = None;

        for attempt in 0..=self.config.retry_attempts {
            if attempt > 0 {
                // Doubling caps at 2^10 so a large retry budget cannot
                // overflow the shift.
                let base = self
                    .config
                    .retry_backoff_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                let jitter = fastrand::u64(..=base / 2);
                tokio::time::sleep(Duration::from_millis(base.saturating_add(jitter))).await;
            }

            match timeout(deadline, call()).await {
                Ok(Ok(())) => return Ok(()),
                Ok(Err(e)) => {
                    debug!(op, attempt, error = %e, "Collaborator call failed");
                    last_error = Some(e);
                }
                Err(_) => {
                    debug!(op, attempt, timeout_ms = self.config.delete_timeout_ms, "Collaborator call timed out");
                    last_error = Some(DomainError::CollaboratorTimeout(format!(
                        "{op} exceeded {}ms",
                        self.config.delete_timeout_ms
                    )));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::CollaboratorFailure(format!("{op} failed without detail"))
        }))
    }

    /// Appends the record and hands it back with its assigned id. Every
    /// executed purge passes through here exactly once.
    async fn log(&self, mut record: PurgeRecord) -> Result<PurgeRecord, DomainError> {
        let id = self.purge_log.append(record.clone()).await?;
        record.id = Some(id);
        Ok(record)
    }
}
