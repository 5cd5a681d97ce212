use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a workflow
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowId(pub String);

impl WorkflowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a workflow step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a workflow or a single step, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    WaitingForDependency,
    Stopped,
}

impl JobStatus {
    /// Terminal statuses never change again without a new run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Stopped)
    }
}

/// What the backend does with the rest of the workflow when a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    StopWorkflow,
    Continue,
}

/// A single step of an externally-executed workflow.
///
/// Field names follow the backend's JSON contract, which mixes camelCase
/// timestamps with snake_case execution fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: StepId,
    pub name: String,
    pub action: String,
    pub status: JobStatus,
    #[serde(default)]
    pub dependencies: Vec<StepId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Human-readable duration string, e.g. "1 min 30 sec"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<FailurePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

/// A lightweight reference to a workflow branched off this one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowBranch {
    pub id: WorkflowId,
    pub name: String,
}

/// A multi-step workflow as reported by the backend.
///
/// The dashboard never mutates workflows; instances are fetched, rendered
/// and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: WorkflowId,
    pub name: String,
    pub status: JobStatus,
    pub steps: Vec<WorkflowStep>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Completion percentage (0-100) as last computed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<WorkflowId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<WorkflowBranch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
}

impl Workflow {
    /// Percentage of completed steps, recomputed client-side.
    ///
    /// The backend reports `progress` too, but it lags behind the step
    /// list when a state file was written mid-update.
    pub fn computed_progress(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        let completed = self
            .steps
            .iter()
            .filter(|s| s.status == JobStatus::Completed)
            .count();
        ((completed * 100) / self.steps.len()) as u8
    }

    /// Lay out this workflow's dependency graph as a renderable diagram.
    pub fn diagram(&self) -> crate::layout::Diagram {
        let steps: Vec<crate::layout::GraphStep> = self.steps.iter().map(Into::into).collect();
        crate::layout::layout(&steps)
    }
}

/// Format an elapsed interval the way the backend does: "45 sec",
/// "1 min 30 sec", "2 hr 5 min".
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let total_seconds = (end - start).num_seconds().max(0);

    if total_seconds < 60 {
        format!("{} sec", total_seconds)
    } else if total_seconds < 3600 {
        format!("{} min {} sec", total_seconds / 60, total_seconds % 60)
    } else {
        format!("{} hr {} min", total_seconds / 3600, (total_seconds % 3600) / 60)
    }
}
