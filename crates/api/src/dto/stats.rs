use chrono::{DateTime, Utc};
use cinder_cdn_domain::{BandwidthSample, CacheOverview, CachePerformance, TopFile};
use serde::Serialize;

use crate::dto::CacheEntryResponse;

#[derive(Serialize, Debug, Clone)]
pub struct OverviewResponse {
    pub total_files: u64,
    pub total_bytes: u64,
    pub image_files: u64,
    pub video_files: u64,
    pub cached_entries: u64,
    pub cached_bytes: u64,
    pub hit_ratio: f64,
    pub bandwidth_last_24h_gb: f64,
}

impl From<CacheOverview> for OverviewResponse {
    fn from(overview: CacheOverview) -> Self {
        Self {
            total_files: overview.files.total_files,
            total_bytes: overview.files.total_bytes,
            image_files: overview.files.image_files,
            video_files: overview.files.video_files,
            cached_entries: overview.cached_entries,
            cached_bytes: overview.cached_bytes,
            hit_ratio: overview.hit_ratio,
            bandwidth_last_24h_gb: overview.bandwidth_last_24h_gb,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BandwidthPointResponse {
    pub hour: DateTime<Utc>,
    pub gb_sent: f64,
    pub hit_ratio: f64,
}

impl From<BandwidthSample> for BandwidthPointResponse {
    fn from(sample: BandwidthSample) -> Self {
        Self {
            hour: sample.hour,
            gb_sent: sample.gb_sent,
            hit_ratio: sample.hit_ratio,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TopFileResponse {
    pub key: String,
    pub downloads: u64,
    pub bytes_served: u64,
}

impl From<TopFile> for TopFileResponse {
    fn from(file: TopFile) -> Self {
        Self {
            key: file.key,
            downloads: file.downloads,
            bytes_served: file.bytes_served,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CachePerformanceResponse {
    pub top_hits: Vec<CacheEntryResponse>,
    pub recent_misses: Vec<CacheEntryResponse>,
}

impl From<CachePerformance> for CachePerformanceResponse {
    fn from(perf: CachePerformance) -> Self {
        Self {
            top_hits: perf.top_hits.into_iter().map(Into::into).collect(),
            recent_misses: perf.recent_misses.into_iter().map(Into::into).collect(),
        }
    }
}
