//! Upstream HTTP client shared by all proxy routes

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::Duration;

use crate::config::TimeoutsConfig;
use crate::error::ProxyError;

const USER_AGENT: &str = concat!("hello-proxy/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    pub fn new(timeouts: &TimeoutsConfig) -> Result<Self, ProxyError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_timeout))
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(USER_AGENT);

        if let Some(secs) = timeouts.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self { http_client: builder.build()? })
    }

    pub fn http(&self) -> &Client {
        &self.http_client
    }

    /// GET `url` and decode the body as JSON. Non-2xx is an error; no retry.
    pub async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ProxyError> {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProxyError::InvalidUpstreamBody(e.to_string()))
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ProxyError {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Upstream error {}: {}", status, body);
        ProxyError::UpstreamStatus {
            status: status.as_u16(),
            body,
        }
    }
}
