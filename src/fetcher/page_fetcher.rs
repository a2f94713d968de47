use async_trait::async_trait;

use crate::error::FetchError;

/// Capability to retrieve the rendered HTML of a single URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
