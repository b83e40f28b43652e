mod bandwidth_repository;
mod bucket_repository;
mod file_metadata;
mod object_deleter;
mod purge_log_repository;

pub use bandwidth_repository::BandwidthRepository;
pub use bucket_repository::BucketRepository;
pub use file_metadata::FileMetadataStore;
pub use object_deleter::ObjectDeleter;
pub use purge_log_repository::PurgeLogRepository;
