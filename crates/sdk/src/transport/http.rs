//! HTTP transport with retrying request execution.

use crate::config::{ClientConfig, RetryConfig};
use crate::error::{FlowdeckError, FlowdeckResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Thin wrapper around `reqwest` carrying auth headers, the base URL and
/// the retry policy.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    pub fn new(config: Arc<ClientConfig>) -> FlowdeckResult<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|_| FlowdeckError::Config("invalid API key format".to_string()))?,
            );
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> FlowdeckResult<url::Url> {
        Ok(self.config.base_url.join(path)?)
    }

    /// Send a request, retrying transient failures with exponential
    /// backoff per the configured [`RetryConfig`].
    async fn execute(&self, request: RequestBuilder) -> FlowdeckResult<Response> {
        let retry = &self.config.retry;
        let mut attempt = 0;

        loop {
            let cloned = request
                .try_clone()
                .ok_or_else(|| FlowdeckError::Config("request cannot be cloned".to_string()))?;

            match cloned.send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response);
                    }

                    let status = response.status().as_u16();
                    if attempt < retry.max_retries && RetryConfig::should_retry_status(status) {
                        let backoff = retry.backoff_for_attempt(attempt);
                        warn!(
                            status,
                            attempt = attempt + 1,
                            backoff_ms = backoff.as_millis() as u64,
                            "request failed, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(FlowdeckError::from_response(status, &body));
                }
                Err(e) => {
                    if attempt < retry.max_retries && (e.is_timeout() || e.is_connect()) {
                        let backoff = retry.backoff_for_attempt(attempt);
                        warn!(
                            attempt = attempt + 1,
                            backoff_ms = backoff.as_millis() as u64,
                            "request errored, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Execute a GET request and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FlowdeckResult<T> {
        let url = self.url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> FlowdeckResult<T> {
        let url = self.url(path)?;
        debug!(url = %url, "POST request");

        let response = self.execute(self.client.post(url).json(body)).await?;
        Ok(response.json().await?)
    }

    /// Execute a POST request with query parameters and a JSON body.
    pub async fn post_with_query<T: DeserializeOwned, Q: Serialize, B: Serialize>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> FlowdeckResult<T> {
        let url = self.url(path)?;
        debug!(url = %url, "POST request with query");

        let response = self
            .execute(self.client.post(url).query(query).json(body))
            .await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        message: String,
    }

    fn transport(base_url: &str, retry: RetryConfig) -> HttpTransport {
        let mut config = ClientConfig::new(url::Url::parse(base_url).unwrap());
        config.retry = retry;
        HttpTransport::new(Arc::new(config)).unwrap()
    }

    fn transport_with_key(base_url: &str, api_key: &str) -> HttpTransport {
        let mut config = ClientConfig::new(url::Url::parse(base_url).unwrap());
        config.api_key = Some(api_key.to_string());
        config.retry = RetryConfig::no_retry();
        HttpTransport::new(Arc::new(config)).unwrap()
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "pong"})),
            )
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), RetryConfig::no_retry());
        let pong: Pong = transport.get("/api/ping").await.unwrap();
        assert_eq!(pong.message, "pong");
    }

    #[tokio::test]
    async fn test_post_with_query_sends_both() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/things"))
            .and(query_param("kind", "demo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "made"})),
            )
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), RetryConfig::no_retry());
        let made: Pong = transport
            .post_with_query(
                "/api/things",
                &[("kind", "demo")],
                &serde_json::json!({"a": 1}),
            )
            .await
            .unwrap();
        assert_eq!(made.message, "made");
    }

    #[tokio::test]
    async fn test_bearer_header_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})),
            )
            .mount(&server)
            .await;

        let transport = transport_with_key(&server.uri(), "sk-test");
        let pong: Pong = transport.get("/api/ping").await.unwrap();
        assert_eq!(pong.message, "ok");
    }

    #[tokio::test]
    async fn test_error_body_detail_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/broken"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"detail": "Internal server error"})),
            )
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), RetryConfig::no_retry());
        let result: FlowdeckResult<Pong> = transport.get("/api/broken").await;
        match result {
            Err(FlowdeckError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Workflow not found"})),
            )
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), RetryConfig::no_retry());
        let result: FlowdeckResult<Pong> = transport.get("/api/missing").await;
        assert!(matches!(result, Err(FlowdeckError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_retries_transient_503() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/flaky"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "recovered"})),
            )
            .mount(&server)
            .await;

        let retry = RetryConfig {
            max_retries: 2,
            base_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
        };
        let transport = transport(&server.uri(), retry);
        let pong: Pong = transport.get("/api/flaky").await.unwrap();
        assert_eq!(pong.message, "recovered");
    }

    #[tokio::test]
    async fn test_no_retry_fails_immediately_on_503() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), RetryConfig::no_retry());
        let result: FlowdeckResult<Pong> = transport.get("/api/flaky").await;
        match result {
            Err(FlowdeckError::Api { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
