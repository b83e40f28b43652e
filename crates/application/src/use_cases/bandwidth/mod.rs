pub mod prune_old_samples;

pub use prune_old_samples::PruneBandwidthSamplesUseCase;
