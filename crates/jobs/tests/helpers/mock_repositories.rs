use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinder_cdn_application::ports::BandwidthRepository;
use cinder_cdn_domain::{BandwidthSample, DomainError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory bandwidth store keyed by hour.
pub struct MockBandwidthRepository {
    hours: Arc<RwLock<BTreeMap<DateTime<Utc>, u64>>>,
    prune_calls: Arc<RwLock<u32>>,
}

impl MockBandwidthRepository {
    pub fn new() -> Self {
        Self {
            hours: Arc::new(RwLock::new(BTreeMap::new())),
            prune_calls: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn seed_hour(&self, hour: DateTime<Utc>, bytes: u64) {
        self.hours.write().await.insert(hour, bytes);
    }

    pub async fn count(&self) -> usize {
        self.hours.read().await.len()
    }

    pub async fn prune_calls(&self) -> u32 {
        *self.prune_calls.read().await
    }
}

#[async_trait]
impl BandwidthRepository for MockBandwidthRepository {
    async fn record_traffic(
        &self,
        at: DateTime<Utc>,
        bytes_sent: u64,
        _hit: bool,
    ) -> Result<(), DomainError> {
        let hour = cinder_cdn_domain::bandwidth::truncate_to_hour(at);
        *self.hours.write().await.entry(hour).or_insert(0) += bytes_sent;
        Ok(())
    }

    async fn range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BandwidthSample>, DomainError> {
        Ok(self
            .hours
            .read()
            .await
            .range(from..to)
            .map(|(hour, bytes)| BandwidthSample::from_counts(*hour, *bytes, 1, 0))
            .collect())
    }

    async fn bytes_sent(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<u64, DomainError> {
        Ok(self.hours.read().await.range(from..to).map(|(_, b)| b).sum())
    }

    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        *self.prune_calls.write().await += 1;
        let mut hours = self.hours.write().await;
        let before = hours.len();
        hours.retain(|hour, _| *hour >= cutoff);
        Ok((before - hours.len()) as u64)
    }
}
