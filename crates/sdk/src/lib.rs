//! # Flowdeck SDK
//!
//! HTTP client for the Flowdeck workflow backend. The dashboard uses it
//! to fetch, create and branch workflows; all rendering and layout lives
//! in `flowdeck-core`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowdeck_sdk::{FlowdeckClient, FlowdeckResult};
//!
//! #[tokio::main]
//! async fn main() -> FlowdeckResult<()> {
//!     let client = FlowdeckClient::builder()
//!         .base_url("http://localhost:8000")
//!         .build()?;
//!
//!     let health = client.health().check().await?;
//!     println!("Backend status: {}", health.status);
//!
//!     for workflow in client.workflows().list().await? {
//!         let diagram = workflow.diagram();
//!         println!(
//!             "{}: {} steps, canvas {}x{}",
//!             workflow.name,
//!             workflow.steps.len(),
//!             diagram.max_width,
//!             diagram.max_height
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{FlowdeckClient, FlowdeckClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{FlowdeckError, FlowdeckResult};

// Re-export core types for convenience
pub use flowdeck_core::{
    layout::{Diagram, DiagramEdge, DiagramNode, GraphStep, Point},
    status::StatusBadge,
    types::{
        FailurePolicy, JobStatus, StepId, Workflow, WorkflowBranch, WorkflowId, WorkflowStep,
    },
};
