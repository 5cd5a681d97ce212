//! Health API endpoints.

use crate::client::FlowdeckClient;
use crate::error::FlowdeckResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health API for checking backend status.
pub struct HealthApi<'a> {
    client: &'a FlowdeckClient,
}

impl<'a> HealthApi<'a> {
    pub(crate) fn new(client: &'a FlowdeckClient) -> Self {
        Self { client }
    }

    /// Check backend health.
    pub async fn check(&self) -> FlowdeckResult<HealthCheck> {
        self.client.http.get("/api/health").await
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
