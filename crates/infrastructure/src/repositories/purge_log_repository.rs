use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinder_cdn_application::ports::PurgeLogRepository;
use cinder_cdn_domain::{DomainError, PurgeKind, PurgeRecord};
use sqlx::{Row, SqlitePool};
use tracing::instrument;

/// SQLite purge audit log. The trait has no update or delete, and neither
/// does this implementation: rows only ever get inserted.
pub struct SqlitePurgeLogRepository {
    pool: SqlitePool,
}

impl SqlitePurgeLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurgeLogRepository for SqlitePurgeLogRepository {
    #[instrument(skip(self, record), fields(kind = record.kind.as_str(), target = %record.target))]
    async fn append(&self, record: PurgeRecord) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO purge_log (kind, target, files_purged, bytes_freed, success, error_detail, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.kind.as_str())
        .bind(&record.target)
        .bind(record.files_purged as i64)
        .bind(record.bytes_freed as i64)
        .bind(record.success)
        .bind(&record.error_detail)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self, limit: u32) -> Result<Vec<PurgeRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, kind, target, files_purged, bytes_freed, success, error_detail, created_at \
             FROM purge_log ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let kind_raw: String = row.get("kind");
                let kind = PurgeKind::from_str(&kind_raw).ok_or_else(|| {
                    DomainError::DatabaseError(format!("unknown purge kind {kind_raw:?}"))
                })?;
                let created_raw: String = row.get("created_at");
                let created_at = DateTime::parse_from_rfc3339(&created_raw)
                    .map_err(|e| {
                        DomainError::DatabaseError(format!("bad created_at {created_raw:?}: {e}"))
                    })?
                    .with_timezone(&Utc);

                Ok(PurgeRecord {
                    id: Some(row.get::<i64, _>("id")),
                    kind,
                    target: row.get("target"),
                    files_purged: row.get::<i64, _>("files_purged") as u64,
                    bytes_freed: row.get::<i64, _>("bytes_freed") as u64,
                    success: row.get("success"),
                    error_detail: row.get("error_detail"),
                    created_at,
                })
            })
            .collect()
    }
}
