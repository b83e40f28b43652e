use async_trait::async_trait;
use cinder_cdn_application::ports::FileMetadataStore;
use cinder_cdn_domain::{DomainError, FileTotals, TopFile};
use sqlx::{Row, SqlitePool};

/// Read-only queries against the file metadata maintained by the upload
/// pipeline.
pub struct SqliteFileMetadataStore {
    pool: SqlitePool,
}

impl SqliteFileMetadataStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileMetadataStore for SqliteFileMetadataStore {
    async fn totals(&self) -> Result<FileTotals, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_files, \
                    COALESCE(SUM(size_bytes), 0) AS total_bytes, \
                    COALESCE(SUM(CASE WHEN media_type = 'image' THEN 1 ELSE 0 END), 0) AS image_files, \
                    COALESCE(SUM(CASE WHEN media_type = 'video' THEN 1 ELSE 0 END), 0) AS video_files \
             FROM files",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(FileTotals {
            total_files: row.get::<i64, _>("total_files") as u64,
            total_bytes: row.get::<i64, _>("total_bytes") as u64,
            image_files: row.get::<i64, _>("image_files") as u64,
            video_files: row.get::<i64, _>("video_files") as u64,
        })
    }

    async fn top_files(&self, limit: u32) -> Result<Vec<TopFile>, DomainError> {
        let rows = sqlx::query(
            "SELECT bucket || '/' || path AS key, download_count, bytes_served \
             FROM files \
             ORDER BY download_count DESC, bytes_served DESC, key ASC \
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| TopFile {
                key: row.get("key"),
                downloads: row.get::<i64, _>("download_count") as u64,
                bytes_served: row.get::<i64, _>("bytes_served") as u64,
            })
            .collect())
    }
}
