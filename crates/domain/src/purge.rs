use chrono::{DateTime, Utc};
use serde::Serialize;

/// Scope of a purge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeKind {
    Single,
    Bucket,
    All,
}

impl PurgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurgeKind::Single => "single",
            PurgeKind::Bucket => "bucket",
            PurgeKind::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(PurgeKind::Single),
            "bucket" => Some(PurgeKind::Bucket),
            "all" => Some(PurgeKind::All),
            _ => None,
        }
    }
}

/// Aggregate result returned by every purge endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurgeOutcome {
    pub files_purged: u64,
    pub bytes_freed: u64,
}

/// One audit record per executed purge operation.
///
/// Append-only: the repository interface offers no update or delete, so a
/// record can never change after it is written.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeRecord {
    pub id: Option<i64>,
    pub kind: PurgeKind,
    /// `bucket/path` for single, bucket name for bucket, empty for all.
    pub target: String,
    pub files_purged: u64,
    pub bytes_freed: u64,
    pub success: bool,
    pub error_detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PurgeRecord {
    pub fn succeeded(kind: PurgeKind, target: impl Into<String>, outcome: PurgeOutcome) -> Self {
        Self {
            id: None,
            kind,
            target: target.into(),
            files_purged: outcome.files_purged,
            bytes_freed: outcome.bytes_freed,
            success: true,
            error_detail: None,
            created_at: Utc::now(),
        }
    }

    pub fn failed(
        kind: PurgeKind,
        target: impl Into<String>,
        outcome: PurgeOutcome,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            kind,
            target: target.into(),
            files_purged: outcome.files_purged,
            bytes_freed: outcome.bytes_freed,
            success: false,
            error_detail: Some(detail.into()),
            created_at: Utc::now(),
        }
    }
}
