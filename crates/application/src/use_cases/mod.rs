pub mod bandwidth;
pub mod cache;
pub mod purge;
pub mod stats;

pub use bandwidth::PruneBandwidthSamplesUseCase;
pub use cache::{
    GetCacheStatusUseCase, ListBucketsUseCase, ListCacheEntriesUseCase, RecordFillUseCase,
    RecordHitUseCase, RecordMissUseCase,
};
pub use purge::GetPurgeHistoryUseCase;
pub use stats::{
    GetBandwidthUseCase, GetCachePerformanceUseCase, GetOverviewUseCase, GetTopFilesUseCase,
};
