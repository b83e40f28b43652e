use async_trait::async_trait;
use cinder_cdn_application::ports::BucketRepository;
use cinder_cdn_domain::DomainError;
use sqlx::{Row, SqlitePool};

pub struct SqliteBucketRepository {
    pool: SqlitePool,
}

impl SqliteBucketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BucketRepository for SqliteBucketRepository {
    async fn exists(&self, bucket: &str) -> Result<bool, DomainError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM buckets WHERE name = ?")
            .bind(bucket)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn list(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query("SELECT name FROM buckets ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.get("name")).collect())
    }
}
