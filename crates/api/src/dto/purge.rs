use chrono::{DateTime, Utc};
use cinder_cdn_domain::PurgeRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct PurgeRecordResponse {
    pub id: Option<i64>,
    pub kind: String,
    pub target: String,
    pub files_purged: u64,
    pub bytes_freed: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PurgeRecord> for PurgeRecordResponse {
    fn from(record: PurgeRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind.as_str().to_string(),
            target: record.target,
            files_purged: record.files_purged,
            bytes_freed: record.bytes_freed,
            success: record.success,
            error_detail: record.error_detail,
            created_at: record.created_at,
        }
    }
}
