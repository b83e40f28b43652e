mod get_bandwidth;
mod get_cache_performance;
mod get_overview;
mod get_top_files;

pub use get_bandwidth::GetBandwidthUseCase;
pub use get_cache_performance::GetCachePerformanceUseCase;
pub use get_overview::GetOverviewUseCase;
pub use get_top_files::GetTopFilesUseCase;
