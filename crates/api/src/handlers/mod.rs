pub mod cache;
pub mod health;
pub mod purge;
pub mod stats;

pub use cache::{get_status, list_buckets, list_entries, record_fill, record_hit, record_miss};
pub use health::health_check;
pub use purge::{get_history, purge_all, purge_bucket, purge_single};
pub use stats::{get_bandwidth, get_cache_performance, get_overview, get_top_files};
