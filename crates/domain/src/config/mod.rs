//! Configuration for Cinder CDN
//!
//! Sections mirror the subsystems they configure:
//! - `root`: main configuration and CLI overrides
//! - `server`: HTTP port and binding
//! - `cache`: index sharding and capacity
//! - `purge`: purge concurrency, timeouts and retries
//! - `edge`: edge-cache collaborator endpoint
//! - `database`: SQLite settings
//! - `retention`: bandwidth sample retention
//! - `logging`: log level

pub mod cache;
pub mod database;
pub mod edge;
pub mod errors;
pub mod logging;
pub mod purge;
pub mod retention;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use edge::EdgeConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use purge::PurgeConfig;
pub use retention::RetentionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
