use crate::ports::BucketRepository;
use cinder_cdn_domain::DomainError;
use std::sync::Arc;

/// Bucket names for the admin panel's purge target picker.
pub struct ListBucketsUseCase {
    buckets: Arc<dyn BucketRepository>,
}

impl ListBucketsUseCase {
    pub fn new(buckets: Arc<dyn BucketRepository>) -> Self {
        Self { buckets }
    }

    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        self.buckets.list().await
    }
}
