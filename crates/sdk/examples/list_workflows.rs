//! List workflows from a running backend.
//!
//! Run with: cargo run --example list_workflows

use flowdeck_sdk::{FlowdeckClient, FlowdeckResult};

#[tokio::main]
async fn main() -> FlowdeckResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter("flowdeck_sdk=debug")
        .init();

    let client = FlowdeckClient::builder()
        .base_url("http://localhost:8000")
        .build()?;

    let health = client.health().check().await?;
    println!("Backend: {} at {}", health.status, health.timestamp);

    for workflow in client.workflows().list().await? {
        let badge = workflow.status.badge();
        println!(
            "{} [{}] {}%, {} steps",
            workflow.name,
            badge.label,
            workflow.progress.unwrap_or_else(|| workflow.computed_progress()),
            workflow.steps.len()
        );
    }

    Ok(())
}
