use async_trait::async_trait;
use cinder_cdn_application::ports::ObjectDeleter;
use cinder_cdn_domain::config::EdgeConfig;
use cinder_cdn_domain::{DomainError, ObjectKey};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument};

/// Edge-cache deleter speaking the edge's purge API over HTTP.
///
/// Idempotent by contract: a 404 from the edge means the object was already
/// gone, which is success for a purge.
pub struct HttpEdgeDeleter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEdgeDeleter {
    pub fn new(config: &EdgeConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| DomainError::CollaboratorFailure(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn map_error(e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::CollaboratorTimeout(e.to_string())
        } else {
            DomainError::CollaboratorFailure(e.to_string())
        }
    }
}

#[async_trait]
impl ObjectDeleter for HttpEdgeDeleter {
    #[instrument(skip(self), fields(key = %key))]
    async fn delete(&self, key: &ObjectKey) -> Result<(), DomainError> {
        let url = format!("{}/cache/{}/{}", self.base_url, key.bucket(), key.path());
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_error)?;

        match response.status() {
            status if status.is_success() || status == StatusCode::NOT_FOUND => {
                debug!(%status, "Edge delete done");
                Ok(())
            }
            status => Err(DomainError::CollaboratorFailure(format!(
                "edge returned {status} for {url}"
            ))),
        }
    }

    #[instrument(skip(self))]
    async fn clear_all(&self) -> Result<(), DomainError> {
        let url = format!("{}/cache", self.base_url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_error)?;

        if response.status().is_success() {
            debug!("Edge cache cleared");
            Ok(())
        } else {
            Err(DomainError::CollaboratorFailure(format!(
                "edge returned {} for clear",
                response.status()
            )))
        }
    }
}
