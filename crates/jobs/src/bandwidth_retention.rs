use cinder_cdn_application::use_cases::PruneBandwidthSamplesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically drops bandwidth hours outside the retention window so the
/// samples table stays bounded.
pub struct BandwidthRetentionJob {
    prune: Arc<PruneBandwidthSamplesUseCase>,
    retention_days: u32,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BandwidthRetentionJob {
    pub fn new(prune: Arc<PruneBandwidthSamplesUseCase>, retention_days: u32) -> Self {
        Self {
            prune,
            retention_days,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            retention_days = self.retention_days,
            "Starting bandwidth retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => {
                        info!("BandwidthRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.prune.execute(self.retention_days).await {
                            Ok(deleted) => {
                                if deleted > 0 {
                                    info!(deleted, "Bandwidth retention cleanup completed");
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "Bandwidth retention cleanup failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
