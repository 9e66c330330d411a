//! Breadth-first escape-route search and the alternative-route heuristic.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::building::{Building, NodeId};
use crate::hazard::HazardState;

/// Find the shortest passable route from the building's start node to any
/// exit, honoring the hazard overlay.
///
/// Breadth-first search over the unweighted graph: the returned route has
/// the minimum hop count among all passable routes. Ties between
/// equal-length routes are broken by adjacency-list order, which the dataset
/// loader derives deterministically from the edge list. Returns `None` when
/// no exit is reachable; this is an expected outcome, not an error.
pub fn find_escape_route(building: &Building, hazards: &HazardState) -> Option<Vec<NodeId>> {
    search(building, hazards, None)
}

/// Find up to `count` distinct routes, the first being the unperturbed
/// shortest route.
///
/// Each subsequent slot perturbs the *previously accepted* route: its
/// interior nodes are blocked one at a time (layered on top of the real
/// hazard overlay, blocked edges unchanged) and the first re-search that
/// yields a route not seen before is accepted and becomes the next basis.
/// Generation stops early once no perturbation produces anything new, so the
/// result may be shorter than `count`: possibly just the shortest route, or
/// empty when no route exists at all.
///
/// This is a deliberately cheap diversity heuristic, not k-shortest-paths:
/// it never layers more than one extra blocked node per step and only
/// perturbs the previous route, so later routes may be suboptimal.
pub fn find_alternative_routes(
    building: &Building,
    hazards: &HazardState,
    count: usize,
) -> Vec<Vec<NodeId>> {
    let Some(first) = find_escape_route(building, hazards) else {
        return Vec::new();
    };

    let mut seen: HashSet<Vec<NodeId>> = HashSet::new();
    seen.insert(first.clone());
    let mut routes = vec![first];

    'slots: while routes.len() < count {
        let basis = routes[routes.len() - 1].clone();
        if basis.len() < 3 {
            // No interior nodes to perturb.
            break;
        }
        for interior in &basis[1..basis.len() - 1] {
            if let Some(candidate) = search(building, hazards, Some(interior.as_str())) {
                if !seen.contains(&candidate) {
                    seen.insert(candidate.clone());
                    routes.push(candidate);
                    continue 'slots;
                }
            }
        }
        break;
    }

    debug!(found = routes.len(), requested = count, "alternative route search finished");
    routes
}

/// BFS with an optional single extra blocked node layered on the overlay.
fn search(building: &Building, hazards: &HazardState, extra_block: Option<&str>) -> Option<Vec<NodeId>> {
    let start = building.start.as_str();
    if hazards.is_node_blocked(start) {
        debug!(start, "start node is blocked; no route");
        return None;
    }

    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if building.is_exit(current) {
            return Some(reconstruct_route(&parents, start, current));
        }

        for neighbour in building.neighbours(current) {
            let next = neighbour.as_str();
            if parents.contains_key(next) {
                continue;
            }
            if hazards.is_node_blocked(next) || extra_block == Some(next) {
                continue;
            }
            if hazards.is_edge_blocked(current, next) {
                continue;
            }
            parents.insert(next, Some(current));
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct_route(parents: &HashMap<&str, Option<&str>>, start: &str, exit: &str) -> Vec<NodeId> {
    let mut route = Vec::new();
    let mut current = Some(exit);
    while let Some(node) = current {
        route.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    route.reverse();
    route
}
