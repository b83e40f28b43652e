use async_trait::async_trait;
use cinder_cdn_domain::{DomainError, ObjectKey};

/// Deletes cached representations from the underlying store (edge cache,
/// disk cache).
///
/// Implementations must be idempotent: deleting an already-absent object is
/// `Ok(())`, never an error.
#[async_trait]
pub trait ObjectDeleter: Send + Sync {
    /// Removes the cached representation of one object.
    ///
    /// # Errors
    ///
    /// * `DomainError::CollaboratorTimeout` - the store did not answer in time
    /// * `DomainError::CollaboratorFailure` - the store rejected the delete
    async fn delete(&self, key: &ObjectKey) -> Result<(), DomainError>;

    /// Clears the entire underlying cache store.
    async fn clear_all(&self) -> Result<(), DomainError>;
}
