mod get_status;
mod list_buckets;
mod list_entries;
mod record_fill;
mod record_hit;
mod record_miss;

pub use get_status::GetCacheStatusUseCase;
pub use list_buckets::ListBucketsUseCase;
pub use list_entries::ListCacheEntriesUseCase;
pub use record_fill::RecordFillUseCase;
pub use record_hit::RecordHitUseCase;
pub use record_miss::RecordMissUseCase;
