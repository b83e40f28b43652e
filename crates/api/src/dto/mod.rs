pub mod cache;
pub mod purge;
pub mod stats;

pub use cache::{
    CacheEntryResponse, CacheListResponse, CacheStatusResponse, TrafficEventRequest,
};
pub use purge::PurgeRecordResponse;
pub use stats::{
    BandwidthPointResponse, CachePerformanceResponse, OverviewResponse, TopFileResponse,
};
