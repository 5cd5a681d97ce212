//! Fetch a workflow and print its dependency diagram geometry.
//!
//! Run with: cargo run --example render_diagram -- <workflow-id>

use flowdeck_sdk::{FlowdeckClient, FlowdeckResult, WorkflowId};

#[tokio::main]
async fn main() -> FlowdeckResult<()> {
    let id = std::env::args()
        .nth(1)
        .expect("usage: render_diagram <workflow-id>");

    let client = FlowdeckClient::builder()
        .base_url("http://localhost:8000")
        .build()?;

    let workflow = client.workflows().get(&WorkflowId::new(id)).await?;
    let diagram = workflow.diagram();

    println!("canvas {} x {}", diagram.max_width, diagram.max_height);
    for node in &diagram.nodes {
        println!(
            "node {:<20} at ({:>6.1}, {:>6.1})  {}x{}",
            node.label, node.x, node.y, node.width, node.height
        );
    }
    for edge in &diagram.edges {
        println!(
            "edge {:<30} ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            edge.id, edge.from.x, edge.from.y, edge.to.x, edge.to.y
        );
    }

    Ok(())
}
