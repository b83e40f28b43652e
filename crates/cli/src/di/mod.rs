use cinder_cdn_api::AppState;
use cinder_cdn_application::ports::{
    BandwidthRepository, BucketRepository, FileMetadataStore, ObjectDeleter, PurgeLogRepository,
};
use cinder_cdn_application::services::PurgeCoordinator;
use cinder_cdn_application::use_cases::{
    GetBandwidthUseCase, GetCachePerformanceUseCase, GetCacheStatusUseCase, GetOverviewUseCase,
    GetPurgeHistoryUseCase, GetTopFilesUseCase, ListBucketsUseCase, ListCacheEntriesUseCase,
    PruneBandwidthSamplesUseCase, RecordFillUseCase, RecordHitUseCase, RecordMissUseCase,
};
use cinder_cdn_application::CacheIndex;
use cinder_cdn_domain::Config;
use cinder_cdn_infrastructure::edge::HttpEdgeDeleter;
use cinder_cdn_infrastructure::repositories::{
    SqliteBandwidthRepository, SqliteBucketRepository, SqliteFileMetadataStore,
    SqlitePurgeLogRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub purge_log: Arc<dyn PurgeLogRepository>,
    pub bandwidth: Arc<dyn BandwidthRepository>,
    pub buckets: Arc<dyn BucketRepository>,
    pub metadata: Arc<dyn FileMetadataStore>,
    pub deleter: Arc<dyn ObjectDeleter>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            purge_log: Arc::new(SqlitePurgeLogRepository::new(pool.clone())),
            bandwidth: Arc::new(SqliteBandwidthRepository::new(pool.clone())),
            buckets: Arc::new(SqliteBucketRepository::new(pool.clone())),
            metadata: Arc::new(SqliteFileMetadataStore::new(pool)),
            deleter: Arc::new(HttpEdgeDeleter::new(&config.edge)?),
        })
    }
}

pub struct Services {
    pub state: AppState,
    pub prune_bandwidth: Arc<PruneBandwidthSamplesUseCase>,
}

impl Services {
    pub fn new(repos: Repositories, config: &Config) -> Self {
        let index = Arc::new(CacheIndex::new(
            config.cache.shards,
            config.cache.initial_capacity,
        ));

        let coordinator = Arc::new(PurgeCoordinator::new(
            index.clone(),
            repos.deleter,
            repos.purge_log.clone(),
            repos.buckets.clone(),
            config.purge.clone(),
        ));

        let state = AppState {
            get_status: Arc::new(GetCacheStatusUseCase::new(index.clone())),
            list_entries: Arc::new(ListCacheEntriesUseCase::new(index.clone())),
            list_buckets: Arc::new(ListBucketsUseCase::new(repos.buckets)),
            record_fill: Arc::new(RecordFillUseCase::new(index.clone())),
            record_hit: Arc::new(RecordHitUseCase::new(
                index.clone(),
                repos.bandwidth.clone(),
            )),
            record_miss: Arc::new(RecordMissUseCase::new(
                index.clone(),
                repos.bandwidth.clone(),
            )),
            purge_coordinator: coordinator,
            get_history: Arc::new(GetPurgeHistoryUseCase::new(repos.purge_log)),
            get_overview: Arc::new(GetOverviewUseCase::new(
                index.clone(),
                repos.metadata.clone(),
                repos.bandwidth.clone(),
            )),
            get_bandwidth: Arc::new(GetBandwidthUseCase::new(repos.bandwidth.clone())),
            get_top_files: Arc::new(GetTopFilesUseCase::new(repos.metadata)),
            get_cache_performance: Arc::new(GetCachePerformanceUseCase::new(index)),
        };

        Self {
            state,
            prune_bandwidth: Arc::new(PruneBandwidthSamplesUseCase::new(repos.bandwidth)),
        }
    }
}
