//! Cinder CDN Application Layer
//!
//! The cache index and purge-coordination engine, plus the ports the
//! infrastructure layer implements.
pub mod cache;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use cache::{CacheIndex, IndexMetrics};
pub use services::PurgeCoordinator;
