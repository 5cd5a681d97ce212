//! Error types for the Flowdeck SDK.

use serde::Deserialize;

/// Result type for SDK operations.
pub type FlowdeckResult<T> = Result<T, FlowdeckError>;

/// Errors from talking to the workflow backend.
#[derive(Debug, thiserror::Error)]
pub enum FlowdeckError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The requested workflow or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl FlowdeckError {
    /// Whether retrying the request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Map a non-success response to an error, extracting the backend's
    /// `detail` message when the body carries one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| body.to_string());

        if status == 404 {
            Self::NotFound(message)
        } else {
            Self::Api { status, message }
        }
    }
}
