//! Cinder CDN Domain Layer
pub mod bandwidth;
pub mod cache_entry;
pub mod config;
pub mod errors;
pub mod object_key;
pub mod purge;
pub mod stats;

pub use bandwidth::BandwidthSample;
pub use cache_entry::CachedObjectEntry;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use object_key::ObjectKey;
pub use purge::{PurgeKind, PurgeOutcome, PurgeRecord};
pub use stats::{CacheOverview, CachePerformance, FileTotals, TopFile};
