use crate::ports::BandwidthRepository;
use chrono::{TimeDelta, Utc};
use cinder_cdn_domain::bandwidth::truncate_to_hour;
use cinder_cdn_domain::{BandwidthSample, DomainError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

const MAX_DAYS: u32 = 30;

/// Hourly bandwidth series for the trailing window.
///
/// The chart needs a contiguous series, so hours without traffic come back as
/// zero-valued samples instead of being omitted.
pub struct GetBandwidthUseCase {
    bandwidth: Arc<dyn BandwidthRepository>,
}

impl GetBandwidthUseCase {
    pub fn new(bandwidth: Arc<dyn BandwidthRepository>) -> Self {
        Self { bandwidth }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, days: u32) -> Result<Vec<BandwidthSample>, DomainError> {
        let days = days.clamp(1, MAX_DAYS);
        let hours = days as i64 * 24;

        let newest_hour = truncate_to_hour(Utc::now());
        let from = newest_hour - TimeDelta::hours(hours - 1);
        let to = newest_hour + TimeDelta::hours(1);

        let stored: HashMap<_, _> = self
            .bandwidth
            .range(from, to)
            .await?
            .into_iter()
            .map(|sample| (sample.hour, sample))
            .collect();

        let series = (0..hours)
            .map(|offset| {
                let hour = from + TimeDelta::hours(offset);
                stored
                    .get(&hour)
                    .cloned()
                    .unwrap_or_else(|| BandwidthSample::zero(hour))
            })
            .collect();

        Ok(series)
    }
}
