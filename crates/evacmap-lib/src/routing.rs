//! Plan-level orchestration over the breadth-first search.

use serde::Serialize;

use crate::building::{Building, NodeId};
use crate::hazard::HazardState;
use crate::path::{find_alternative_routes, find_escape_route};

/// An ordered walk from the start node to an exit. Consecutive steps are
/// adjacent in the building graph and every step is passable under the
/// hazard overlay the route was planned against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscapeRoute {
    pub steps: Vec<NodeId>,
}

impl EscapeRoute {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The exit this route terminates at.
    pub fn exit(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }
}

/// Result of planning under the current hazard overlay.
///
/// A missing `primary` route means the building cannot be evacuated: an
/// expected simulation outcome, surfaced as data rather than an error.
#[derive(Debug, Clone, Serialize, Default)]
pub struct EvacuationPlan {
    pub primary: Option<EscapeRoute>,
    pub alternatives: Vec<EscapeRoute>,
}

impl EvacuationPlan {
    /// Whether any exit is reachable.
    pub fn is_evacuable(&self) -> bool {
        self.primary.is_some()
    }
}

/// Compute the evacuation plan for the current hazard overlay.
///
/// `route_count` is the total number of distinct routes wanted, primary
/// included; values of zero or one skip the alternative-route search
/// entirely. Fewer routes than requested may come back when the heuristic
/// runs out of perturbations.
pub fn plan_evacuation(
    building: &Building,
    hazards: &HazardState,
    route_count: usize,
) -> EvacuationPlan {
    if route_count <= 1 {
        return EvacuationPlan {
            primary: find_escape_route(building, hazards).map(|steps| EscapeRoute { steps }),
            alternatives: Vec::new(),
        };
    }

    let mut routes = find_alternative_routes(building, hazards, route_count)
        .into_iter()
        .map(|steps| EscapeRoute { steps });
    let primary = routes.next();
    EvacuationPlan {
        primary,
        alternatives: routes.collect(),
    }
}
