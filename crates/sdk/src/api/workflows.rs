//! Workflows API endpoints.

use crate::client::FlowdeckClient;
use crate::error::FlowdeckResult;
use flowdeck_core::types::{Workflow, WorkflowId};
use serde::Serialize;

/// Workflows API for fetching, creating and branching workflows.
pub struct WorkflowsApi<'a> {
    client: &'a FlowdeckClient,
}

impl<'a> WorkflowsApi<'a> {
    pub(crate) fn new(client: &'a FlowdeckClient) -> Self {
        Self { client }
    }

    /// List all workflows, most recently updated first.
    pub async fn list(&self) -> FlowdeckResult<Vec<Workflow>> {
        self.client.http.get("/api/workflows").await
    }

    /// Get a specific workflow by ID.
    pub async fn get(&self, id: &WorkflowId) -> FlowdeckResult<Workflow> {
        self.client
            .http
            .get(&format!("/api/workflows/{}", id.0))
            .await
    }

    /// Create a workflow from a template. `params` is forwarded to the
    /// template expansion untouched.
    pub async fn create_from_template(
        &self,
        template_id: &str,
        params: &serde_json::Value,
    ) -> FlowdeckResult<Workflow> {
        self.client
            .http
            .post_with_query(
                "/api/workflows/from-template",
                &[("template_id", template_id)],
                params,
            )
            .await
    }

    /// Branch an existing workflow into a new one with the given name.
    pub async fn branch(&self, id: &WorkflowId, name: &str) -> FlowdeckResult<Workflow> {
        self.client
            .http
            .post(
                &format!("/api/workflows/{}/branch", id.0),
                &BranchRequest { name },
            )
            .await
    }
}

#[derive(Debug, Serialize)]
struct BranchRequest<'a> {
    name: &'a str,
}
