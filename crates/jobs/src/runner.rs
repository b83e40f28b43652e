use crate::BandwidthRetentionJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
pub struct JobRunner {
    bandwidth_retention: Option<BandwidthRetentionJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            bandwidth_retention: None,
        }
    }

    pub fn with_bandwidth_retention(mut self, job: BandwidthRetentionJob) -> Self {
        self.bandwidth_retention = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.bandwidth_retention {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
