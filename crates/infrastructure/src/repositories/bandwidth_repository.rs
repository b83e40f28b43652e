use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinder_cdn_application::ports::BandwidthRepository;
use cinder_cdn_domain::bandwidth::truncate_to_hour;
use cinder_cdn_domain::{BandwidthSample, DomainError};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// SQLite hourly bandwidth accounting.
///
/// Every serving event upserts its hour row; `gb_sent` and `hit_ratio` are
/// derived on read from the raw counters.
pub struct SqliteBandwidthRepository {
    pool: SqlitePool,
}

impl SqliteBandwidthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BandwidthRepository for SqliteBandwidthRepository {
    async fn record_traffic(
        &self,
        at: DateTime<Utc>,
        bytes_sent: u64,
        hit: bool,
    ) -> Result<(), DomainError> {
        let hour = truncate_to_hour(at).to_rfc3339();
        let (hits, misses) = if hit { (1i64, 0i64) } else { (0i64, 1i64) };

        sqlx::query(
            "INSERT INTO bandwidth_samples (hour, bytes_sent, hits, misses) VALUES (?, ?, ?, ?) \
             ON CONFLICT (hour) DO UPDATE SET \
                 bytes_sent = bytes_sent + excluded.bytes_sent, \
                 hits = hits + excluded.hits, \
                 misses = misses + excluded.misses",
        )
        .bind(&hour)
        .bind(bytes_sent as i64)
        .bind(hits)
        .bind(misses)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BandwidthSample>, DomainError> {
        // RFC 3339 UTC strings sort chronologically, so string comparison
        // matches timestamp comparison here.
        let rows = sqlx::query(
            "SELECT hour, bytes_sent, hits, misses FROM bandwidth_samples \
             WHERE hour >= ? AND hour < ? ORDER BY hour ASC",
        )
        .bind(from.to_rfc3339())
        .bind(to.to_rfc3339())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let hour_raw: String = row.get("hour");
                let hour = DateTime::parse_from_rfc3339(&hour_raw)
                    .map_err(|e| {
                        DomainError::DatabaseError(format!("bad hour {hour_raw:?}: {e}"))
                    })?
                    .with_timezone(&Utc);
                Ok(BandwidthSample::from_counts(
                    hour,
                    row.get::<i64, _>("bytes_sent") as u64,
                    row.get::<i64, _>("hits") as u64,
                    row.get::<i64, _>("misses") as u64,
                ))
            })
            .collect()
    }

    async fn bytes_sent(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(bytes_sent), 0) FROM bandwidth_samples \
             WHERE hour >= ? AND hour < ?",
        )
        .bind(from.to_rfc3339())
        .bind(to.to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(total as u64)
    }

    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM bandwidth_samples WHERE hour < ?")
            .bind(cutoff.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            debug!(deleted, "Pruned old bandwidth samples");
        }
        Ok(deleted)
    }
}
