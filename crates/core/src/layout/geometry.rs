//! Projection of leveled steps into absolute canvas geometry.
//!
//! Output is plain data: axis-aligned node boxes, trimmed edge segments
//! and the canvas bounds. Any renderer can consume it by drawing a
//! rectangle plus label per node and a line plus arrowhead per edge.

use super::graph::GraphStep;
use crate::types::StepId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Node box width in canvas units.
pub const NODE_WIDTH: f64 = 150.0;
/// Node box height in canvas units.
pub const NODE_HEIGHT: f64 = 60.0;
/// Horizontal gap between columns.
pub const X_GAP: f64 = 80.0;
/// Vertical gap between level rows.
pub const Y_GAP: f64 = 60.0;
/// How far the target endpoint is pulled back to leave room for an
/// arrowhead marker.
pub const ARROW_LENGTH: f64 = 10.0;

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned, labeled node box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: StepId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A dependency arrow between two nodes, already trimmed for the
/// arrowhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    /// Derived as `"{source}-{target}"`.
    pub id: String,
    pub source: StepId,
    pub target: StepId,
    pub from: Point,
    pub to: Point,
}

/// A fully laid-out diagram plus the canvas bounds enclosing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    pub max_width: f64,
    pub max_height: f64,
}

/// Project leveled steps into node boxes, edge segments and canvas bounds.
///
/// Level determines the row, position within the level (by input order)
/// the column. Dependencies whose endpoint has no node are dropped
/// silently; this function never fails.
pub fn project(steps: &[GraphStep], levels: &HashMap<StepId, u32>) -> Diagram {
    // A step the leveler never saw sits in the top row rather than
    // knocking out the whole diagram.
    let level_for = |step: &GraphStep| levels.get(&step.id).copied().unwrap_or(0) as usize;

    let level_count = steps.iter().map(|s| level_for(s) + 1).max().unwrap_or(0);
    let mut rows: Vec<Vec<&GraphStep>> = vec![Vec::new(); level_count];
    for step in steps {
        rows[level_for(step)].push(step);
    }

    let mut nodes = Vec::with_capacity(steps.len());
    let mut index: HashMap<&StepId, usize> = HashMap::with_capacity(steps.len());
    for (row, row_steps) in rows.iter().enumerate() {
        for (column, step) in row_steps.iter().enumerate() {
            let node = DiagramNode {
                id: step.id.clone(),
                label: step.name.clone(),
                x: column as f64 * (NODE_WIDTH + X_GAP) + X_GAP / 2.0,
                y: row as f64 * (NODE_HEIGHT + Y_GAP) + Y_GAP / 2.0,
                width: NODE_WIDTH,
                height: NODE_HEIGHT,
            };
            index.insert(&step.id, nodes.len());
            nodes.push(node);
        }
    }

    let mut edges = Vec::new();
    for step in steps {
        for dep in &step.dependencies {
            let (source, target) = match (index.get(dep), index.get(&step.id)) {
                (Some(&s), Some(&t)) => (&nodes[s], &nodes[t]),
                _ => {
                    debug!(source = %dep, target = %step.id, "dropping edge with unresolvable endpoint");
                    continue;
                }
            };

            let from = Point {
                x: source.x + NODE_WIDTH / 2.0,
                y: source.y + NODE_HEIGHT,
            };
            let to = trim_endpoint(
                from,
                Point {
                    x: target.x + NODE_WIDTH / 2.0,
                    y: target.y,
                },
            );

            edges.push(DiagramEdge {
                id: format!("{}-{}", dep, step.id),
                source: dep.clone(),
                target: step.id.clone(),
                from,
                to,
            });
        }
    }

    let max_width = nodes
        .iter()
        .map(|n| n.x + n.width)
        .fold(0.0_f64, f64::max);
    let max_height = level_count as f64 * (NODE_HEIGHT + Y_GAP);

    Diagram {
        nodes,
        edges,
        max_width,
        max_height,
    }
}

/// Pull `to` back towards `from` by [`ARROW_LENGTH`]. A zero-length
/// segment is returned untouched to avoid dividing by zero.
fn trim_endpoint(from: Point, to: Point) -> Point {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return to;
    }
    Point {
        x: to.x - dx / length * ARROW_LENGTH,
        y: to.y - dy / length * ARROW_LENGTH,
    }
}
