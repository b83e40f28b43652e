#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cinder_cdn_api::{create_api_routes, AppState};
use cinder_cdn_application::services::PurgeCoordinator;
use cinder_cdn_application::use_cases::{
    GetBandwidthUseCase, GetCachePerformanceUseCase, GetCacheStatusUseCase, GetOverviewUseCase,
    GetPurgeHistoryUseCase, GetTopFilesUseCase, ListBucketsUseCase, ListCacheEntriesUseCase,
    RecordFillUseCase, RecordHitUseCase, RecordMissUseCase,
};
use cinder_cdn_application::CacheIndex;
use cinder_cdn_application::ports::ObjectDeleter;
use cinder_cdn_domain::config::PurgeConfig;
use cinder_cdn_domain::{DomainError, ObjectKey};
use cinder_cdn_infrastructure::repositories::{
    SqliteBandwidthRepository, SqliteBucketRepository, SqliteFileMetadataStore,
    SqlitePurgeLogRepository,
};
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

/// ObjectDeleter double that records calls instead of talking to an edge.
pub struct RecordingDeleter {
    deleted: RwLock<Vec<String>>,
    clear_all_calls: RwLock<u32>,
}

impl RecordingDeleter {
    pub fn new() -> Self {
        Self {
            deleted: RwLock::new(Vec::new()),
            clear_all_calls: RwLock::new(0),
        }
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.read().await.clone()
    }

    pub async fn clear_all_calls(&self) -> u32 {
        *self.clear_all_calls.read().await
    }
}

#[async_trait]
impl ObjectDeleter for RecordingDeleter {
    async fn delete(&self, key: &ObjectKey) -> Result<(), DomainError> {
        self.deleted.write().await.push(key.to_string());
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        *self.clear_all_calls.write().await += 1;
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: sqlx::SqlitePool,
    pub index: Arc<CacheIndex>,
    pub deleter: Arc<RecordingDeleter>,
}

impl TestApp {
    /// Full stack against an in-memory database, seeded with the given
    /// buckets.
    pub async fn start(buckets: &[&str]) -> Self {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::raw_sql(include_str!("../../migrations/0001_schema.sql"))
            .execute(&pool)
            .await
            .unwrap();

        for bucket in buckets {
            sqlx::query("INSERT INTO buckets (name, created_at) VALUES (?, '2026-01-01T00:00:00+00:00')")
                .bind(bucket)
                .execute(&pool)
                .await
                .unwrap();
        }

        let index = Arc::new(CacheIndex::new(16, 256));
        let deleter = Arc::new(RecordingDeleter::new());
        let purge_log = Arc::new(SqlitePurgeLogRepository::new(pool.clone()));
        let bandwidth = Arc::new(SqliteBandwidthRepository::new(pool.clone()));
        let bucket_repo = Arc::new(SqliteBucketRepository::new(pool.clone()));
        let metadata = Arc::new(SqliteFileMetadataStore::new(pool.clone()));

        let coordinator = Arc::new(PurgeCoordinator::new(
            index.clone(),
            deleter.clone(),
            purge_log.clone(),
            bucket_repo.clone(),
            PurgeConfig {
                bucket_concurrency: 4,
                delete_timeout_ms: 1_000,
                retry_attempts: 1,
                retry_backoff_ms: 1,
            },
        ));

        let state = AppState {
            get_status: Arc::new(GetCacheStatusUseCase::new(index.clone())),
            list_entries: Arc::new(ListCacheEntriesUseCase::new(index.clone())),
            list_buckets: Arc::new(ListBucketsUseCase::new(bucket_repo)),
            record_fill: Arc::new(RecordFillUseCase::new(index.clone())),
            record_hit: Arc::new(RecordHitUseCase::new(index.clone(), bandwidth.clone())),
            record_miss: Arc::new(RecordMissUseCase::new(index.clone(), bandwidth.clone())),
            purge_coordinator: coordinator,
            get_history: Arc::new(GetPurgeHistoryUseCase::new(purge_log)),
            get_overview: Arc::new(GetOverviewUseCase::new(
                index.clone(),
                metadata.clone(),
                bandwidth.clone(),
            )),
            get_bandwidth: Arc::new(GetBandwidthUseCase::new(bandwidth)),
            get_top_files: Arc::new(GetTopFilesUseCase::new(metadata)),
            get_cache_performance: Arc::new(GetCachePerformanceUseCase::new(index.clone())),
        };

        let router = Router::new().nest("/api", create_api_routes(state));

        Self {
            router,
            pool,
            index,
            deleter,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        Self::split(response).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        Self::split(response).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> StatusCode {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    async fn split(
        response: axum::response::Response,
    ) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, body)
    }
}
