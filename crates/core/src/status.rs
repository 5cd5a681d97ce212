//! Presentation mapping from job statuses to badge labels and colors.
//!
//! Pure lookup data consumed by whatever widget renders the badge; no
//! drawing happens here.

use crate::types::JobStatus;
use serde::Serialize;

/// Display label and hex color for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: &'static str,
}

impl JobStatus {
    /// Badge shown for this status in lists and detail panels.
    pub fn badge(&self) -> StatusBadge {
        match self {
            Self::Pending => StatusBadge {
                label: "Pending",
                color: "#9ca3af",
            },
            Self::Running => StatusBadge {
                label: "Running",
                color: "#3b82f6",
            },
            Self::Completed => StatusBadge {
                label: "Completed",
                color: "#22c55e",
            },
            Self::Failed => StatusBadge {
                label: "Failed",
                color: "#ef4444",
            },
            Self::WaitingForDependency => StatusBadge {
                label: "Waiting",
                color: "#f59e0b",
            },
            Self::Stopped => StatusBadge {
                label: "Stopped",
                color: "#6b7280",
            },
        }
    }
}
