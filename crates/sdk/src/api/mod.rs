//! API surfaces exposed by the backend.

mod health;
mod workflows;

pub use health::{HealthApi, HealthCheck};
pub use workflows::WorkflowsApi;
