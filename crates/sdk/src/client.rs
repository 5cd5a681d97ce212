//! Main client for the Flowdeck SDK.

use crate::api::{HealthApi, WorkflowsApi};
use crate::config::{ClientConfig, RetryConfig};
use crate::error::{FlowdeckError, FlowdeckResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Flowdeck workflow backend.
#[derive(Clone)]
pub struct FlowdeckClient {
    pub(crate) http: HttpTransport,
}

impl FlowdeckClient {
    /// Create a new client builder.
    pub fn builder() -> FlowdeckClientBuilder {
        FlowdeckClientBuilder::new()
    }

    fn from_config(config: ClientConfig) -> FlowdeckResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;
        Ok(Self { http })
    }

    /// Get the health API.
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }

    /// Get the workflows API.
    pub fn workflows(&self) -> WorkflowsApi<'_> {
        WorkflowsApi::new(self)
    }
}

/// Builder for creating a [`FlowdeckClient`].
pub struct FlowdeckClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    retry: RetryConfig,
}

impl FlowdeckClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Set the base URL of the workflow backend (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a bearer token for deployments behind an auth proxy.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Build the client.
    pub fn build(self) -> FlowdeckResult<FlowdeckClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| FlowdeckError::Config("base_url is required".to_string()))?;

        let config = ClientConfig {
            base_url: Url::parse(&base_url)?,
            api_key: self.api_key,
            timeout: self.timeout,
            retry: self.retry,
        };

        FlowdeckClient::from_config(config)
    }
}

impl Default for FlowdeckClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let result = FlowdeckClient::builder().build();
        assert!(matches!(result, Err(FlowdeckError::Config(_))));
    }

    #[test]
    fn test_build_rejects_malformed_url() {
        let result = FlowdeckClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(FlowdeckError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_happy_path() {
        let client = FlowdeckClient::builder()
            .base_url("http://localhost:8000")
            .api_key("sk-test")
            .timeout(Duration::from_secs(5))
            .retry(RetryConfig::no_retry())
            .build();
        assert!(client.is_ok());
    }
}
