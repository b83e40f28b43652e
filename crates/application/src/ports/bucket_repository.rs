use async_trait::async_trait;
use cinder_cdn_domain::DomainError;

/// Bucket administration, consulted only to validate purge targets.
#[async_trait]
pub trait BucketRepository: Send + Sync {
    async fn exists(&self, bucket: &str) -> Result<bool, DomainError>;

    async fn list(&self) -> Result<Vec<String>, DomainError>;
}
