//! Input boundary of the layout engine.
//!
//! The engine only needs `{id, name, dependencies}` out of a step record.
//! Records arriving as raw JSON are narrowed here: a record without an
//! `id` rejects the whole input, while semantically odd graphs (cycles,
//! references to steps that do not exist) pass through untouched and are
//! handled by the leveler and projector policies.

use crate::types::{StepId, WorkflowStep};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from narrowing untrusted step records.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("expected an array of step records")]
    NotAnArray,

    #[error("invalid step record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// The slice of a workflow step the layout engine consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStep {
    pub id: StepId,
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<StepId>,
}

impl From<&WorkflowStep> for GraphStep {
    fn from(step: &WorkflowStep) -> Self {
        Self {
            id: step.id.clone(),
            name: step.name.clone(),
            dependencies: step.dependencies.clone(),
        }
    }
}

/// Narrow a raw JSON array of step records into [`GraphStep`]s.
///
/// Fails fast on structural problems only: non-array input, non-object
/// records, or a record with no `id`. A missing `name` falls back to the
/// id and missing `dependencies` to an empty list.
pub fn steps_from_json(value: &serde_json::Value) -> Result<Vec<GraphStep>, GraphError> {
    let records = value.as_array().ok_or(GraphError::NotAnArray)?;

    let mut steps = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let object = record.as_object().ok_or_else(|| GraphError::InvalidRecord {
            index,
            reason: "not an object".to_string(),
        })?;

        let id = object
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| GraphError::InvalidRecord {
                index,
                reason: "missing id".to_string(),
            })?;

        let name = object
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(id)
            .to_string();

        let dependencies = object
            .get("dependencies")
            .and_then(|v| v.as_array())
            .map(|deps| {
                deps.iter()
                    .filter_map(|d| d.as_str())
                    .map(StepId::new)
                    .collect()
            })
            .unwrap_or_default();

        steps.push(GraphStep {
            id: StepId::new(id),
            name,
            dependencies,
        });
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_records() {
        let raw = serde_json::json!([
            { "id": "a", "name": "Step A", "dependencies": [] },
            { "id": "b", "name": "Step B", "dependencies": ["a"] },
        ]);

        let steps = steps_from_json(&raw).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].id, StepId::new("b"));
        assert_eq!(steps[1].dependencies, vec![StepId::new("a")]);
    }

    #[test]
    fn test_missing_name_defaults_to_id() {
        let raw = serde_json::json!([{ "id": "a" }]);

        let steps = steps_from_json(&raw).unwrap();
        assert_eq!(steps[0].name, "a");
        assert!(steps[0].dependencies.is_empty());
    }

    #[test]
    fn test_missing_id_rejects_whole_input() {
        let raw = serde_json::json!([
            { "id": "a" },
            { "name": "no id here" },
        ]);

        let err = steps_from_json(&raw).unwrap_err();
        assert!(matches!(err, GraphError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_non_array_input_rejected() {
        let raw = serde_json::json!({ "id": "a" });
        assert!(matches!(steps_from_json(&raw), Err(GraphError::NotAnArray)));
    }

    #[test]
    fn test_from_workflow_step_keeps_dependency_ids() {
        let step = WorkflowStep {
            id: StepId::new("s2"),
            name: "Second".to_string(),
            action: "noop".to_string(),
            status: crate::types::JobStatus::Pending,
            dependencies: vec![StepId::new("s1")],
            outputs: None,
            error: None,
            start_time: None,
            end_time: None,
            duration: None,
            logs: None,
            metadata: None,
            on_failure: None,
            params: None,
        };

        let graph_step = GraphStep::from(&step);
        assert_eq!(graph_step.id, StepId::new("s2"));
        assert_eq!(graph_step.name, "Second");
        assert_eq!(graph_step.dependencies, vec![StepId::new("s1")]);
    }
}
