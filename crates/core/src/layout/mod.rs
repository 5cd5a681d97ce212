//! Dependency-graph layout engine.
//!
//! Turns a workflow's flat step list into a renderable node-and-edge
//! diagram: [`level::assign_levels`] assigns each step a row depth, then
//! [`geometry::project`] produces absolute 2D geometry. Both halves are
//! pure functions that tolerate cycles and dangling dependency references
//! without failing; the renderer on top of this does no layout logic.

pub mod geometry;
pub mod graph;
pub mod level;

pub use geometry::{
    project, Diagram, DiagramEdge, DiagramNode, Point, ARROW_LENGTH, NODE_HEIGHT, NODE_WIDTH,
    X_GAP, Y_GAP,
};
pub use graph::{steps_from_json, GraphError, GraphStep};
pub use level::assign_levels;

/// Run the full layout pipeline: level assignment followed by projection.
pub fn layout(steps: &[GraphStep]) -> Diagram {
    let levels = assign_levels(steps);
    project(steps, &levels)
}
