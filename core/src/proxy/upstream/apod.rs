//! NASA Astronomy Picture of the Day

use serde_json::Value;

use crate::config::ApodConfig;
use crate::error::ProxyError;
use crate::proxy::upstream::UpstreamClient;

#[derive(Clone)]
pub struct ApodClient {
    upstream: UpstreamClient,
    url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(upstream: UpstreamClient, config: &ApodConfig) -> Self {
        Self {
            upstream,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch today's entry; the upstream JSON is returned untouched.
    pub async fn fetch(&self) -> Result<Value, ProxyError> {
        tracing::debug!("Fetching APOD from {}", self.url);
        self.upstream
            .get_json(&self.url, &[("api_key", self.api_key.as_str())])
            .await
    }
}
