//! Sharded cache index: the single source of truth for what is cached.

mod index;
mod metrics;

pub use index::{CacheIndex, ClearGuard, PurgePlanEntry};
pub use metrics::IndexMetrics;
