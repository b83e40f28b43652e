pub mod bandwidth_retention;
pub mod runner;

pub use bandwidth_retention::BandwidthRetentionJob;
pub use runner::JobRunner;
