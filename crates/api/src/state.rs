use cinder_cdn_application::services::PurgeCoordinator;
use cinder_cdn_application::use_cases::{
    GetBandwidthUseCase, GetCachePerformanceUseCase, GetCacheStatusUseCase, GetOverviewUseCase,
    GetPurgeHistoryUseCase, GetTopFilesUseCase, ListBucketsUseCase, ListCacheEntriesUseCase,
    RecordFillUseCase, RecordHitUseCase, RecordMissUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_status: Arc<GetCacheStatusUseCase>,
    pub list_entries: Arc<ListCacheEntriesUseCase>,
    pub list_buckets: Arc<ListBucketsUseCase>,
    pub record_fill: Arc<RecordFillUseCase>,
    pub record_hit: Arc<RecordHitUseCase>,
    pub record_miss: Arc<RecordMissUseCase>,
    pub purge_coordinator: Arc<PurgeCoordinator>,
    pub get_history: Arc<GetPurgeHistoryUseCase>,
    pub get_overview: Arc<GetOverviewUseCase>,
    pub get_bandwidth: Arc<GetBandwidthUseCase>,
    pub get_top_files: Arc<GetTopFilesUseCase>,
    pub get_cache_performance: Arc<GetCachePerformanceUseCase>,
}
