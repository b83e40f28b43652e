mod bandwidth_repository;
mod bucket_repository;
mod file_metadata_repository;
mod purge_log_repository;

pub use bandwidth_repository::SqliteBandwidthRepository;
pub use bucket_repository::SqliteBucketRepository;
pub use file_metadata_repository::SqliteFileMetadataStore;
pub use purge_log_repository::SqlitePurgeLogRepository;
