//! Row-depth assignment for the dependency graph.
//!
//! Iterative wavefront leveling rather than recursive depth computation:
//! the step list comes from an untrusted service response, so the
//! algorithm must terminate on cyclic and dangling inputs without any
//! recursion-guard bookkeeping.

use super::graph::GraphStep;
use crate::types::StepId;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Assign every step a level such that each step sits strictly below all
/// of its resolvable dependencies.
///
/// Pass `L` assigns level `L` to every step whose dependencies are all
/// either already leveled or absent from the input id set (a missing
/// dependency cannot block progress). The pass loop is bounded by the
/// step count, so cycles cannot loop forever; whatever remains unassigned
/// afterwards is a cycle participant (or depends only on one) and is
/// placed in a single trailing level, preserving input order.
///
/// Every input step id appears in the returned map exactly once.
pub fn assign_levels(steps: &[GraphStep]) -> HashMap<StepId, u32> {
    let known: HashSet<&StepId> = steps.iter().map(|s| &s.id).collect();
    let mut levels: HashMap<StepId, u32> = HashMap::with_capacity(steps.len());
    let mut level: u32 = 0;

    for _ in 0..steps.len() {
        let unlocked: Vec<&GraphStep> = steps
            .iter()
            .filter(|s| !levels.contains_key(&s.id))
            .filter(|s| {
                s.dependencies
                    .iter()
                    .all(|dep| levels.contains_key(dep) || !known.contains(dep))
            })
            .collect();

        if unlocked.is_empty() {
            break;
        }

        for step in unlocked {
            levels.insert(step.id.clone(), level);
        }
        level += 1;
    }

    let stranded: Vec<&GraphStep> = steps
        .iter()
        .filter(|s| !levels.contains_key(&s.id))
        .collect();
    if !stranded.is_empty() {
        warn!(
            count = stranded.len(),
            level, "steps with unresolvable dependencies placed in trailing level"
        );
        for step in stranded {
            levels.insert(step.id.clone(), level);
        }
    }

    levels
}
