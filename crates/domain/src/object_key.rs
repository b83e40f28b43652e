use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Composite key of a cached object: bucket plus object path.
///
/// Immutable once created. Ordering is lexicographic on `(bucket, path)`,
/// which keeps paged listings deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ObjectKey {
    bucket: Arc<str>,
    path: Arc<str>,
}

impl ObjectKey {
    pub fn new(bucket: &str, path: &str) -> Result<Self, DomainError> {
        if bucket.is_empty() || bucket.contains('/') {
            return Err(DomainError::InvalidKey(format!(
                "invalid bucket name: {bucket:?}"
            )));
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(DomainError::InvalidKey(format!(
                "empty object path in bucket {bucket:?}"
            )));
        }
        Ok(Self {
            bucket: Arc::from(bucket),
            path: Arc::from(path),
        })
    }

    /// Parses the canonical `bucket/path` form used by the purge API.
    pub fn parse(full_path: &str) -> Result<Self, DomainError> {
        let trimmed = full_path.trim_start_matches('/');
        match trimmed.split_once('/') {
            Some((bucket, path)) => Self::new(bucket, path),
            None => Err(DomainError::InvalidKey(format!(
                "expected bucket/path, got {full_path:?}"
            ))),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn in_bucket(&self, bucket: &str) -> bool {
        &*self.bucket == bucket
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.path)
    }
}
