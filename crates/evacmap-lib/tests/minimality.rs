//! Exhaustive cross-checks of the shortest-route guarantee.

mod common;

use evacmap_lib::{find_escape_route, Building, HazardState};

/// Enumerate every simple path from `current` to any exit by depth-first
/// search and return the minimum hop count, honoring the hazard overlay.
fn exhaustive_min_hops(
    building: &Building,
    hazards: &HazardState,
    current: &str,
    visited: &mut Vec<String>,
) -> Option<usize> {
    if building.is_exit(current) {
        return Some(0);
    }
    let mut best: Option<usize> = None;
    for neighbour in building.neighbours(current) {
        if visited.iter().any(|seen| seen == neighbour) {
            continue;
        }
        if hazards.is_node_blocked(neighbour) || hazards.is_edge_blocked(current, neighbour) {
            continue;
        }
        visited.push(neighbour.clone());
        if let Some(rest) = exhaustive_min_hops(building, hazards, neighbour, visited) {
            let hops = rest + 1;
            best = Some(best.map_or(hops, |current_best| current_best.min(hops)));
        }
        visited.pop();
    }
    best
}

fn assert_bfs_matches_exhaustive(building: &Building, hazards: &HazardState) {
    let bfs = find_escape_route(building, hazards).map(|route| route.len() - 1);
    let exhaustive = if hazards.is_node_blocked(&building.start) {
        None
    } else {
        let mut visited = vec![building.start.clone()];
        exhaustive_min_hops(building, hazards, &building.start, &mut visited)
    };
    assert_eq!(bfs, exhaustive);
}

#[test]
fn chain_and_diamond_are_minimal() {
    for building in [common::chain(), common::diamond()] {
        assert_bfs_matches_exhaustive(&building, &HazardState::new());
    }
}

#[test]
fn braided_graph_is_minimal_under_every_single_node_block() {
    // A graph with several cycles and two exits of differing distance.
    let building = common::synthetic(
        "s",
        &["x1", "x2"],
        &[
            ("s", "control"),
            ("a", "corridor"),
            ("b", "corridor"),
            ("c", "corridor"),
            ("d", "corridor"),
            ("e", "corridor"),
            ("f", "corridor"),
            ("x1", "exit"),
            ("x2", "exit"),
        ],
        &[
            ("s", "a"),
            ("s", "b"),
            ("a", "c"),
            ("b", "c"),
            ("b", "d"),
            ("c", "e"),
            ("d", "e"),
            ("d", "f"),
            ("e", "x1"),
            ("f", "x2"),
            ("a", "b"),
        ],
    );

    assert_bfs_matches_exhaustive(&building, &HazardState::new());
    for node in ["a", "b", "c", "d", "e", "f"] {
        let mut hazards = HazardState::new();
        hazards
            .apply(&building, node, Default::default())
            .expect("interior node accepts hazard");
        assert_bfs_matches_exhaustive(&building, &hazards);
    }
}

#[test]
fn braided_graph_is_minimal_under_every_single_edge_block() {
    let building = common::diamond();
    for (a, b) in [("s", "a"), ("s", "b"), ("a", "x"), ("b", "x")] {
        let mut hazards = HazardState::new();
        hazards.block_edge(&building, a, b);
        assert_bfs_matches_exhaustive(&building, &hazards);
    }
}

#[test]
fn bundled_building_is_minimal_under_preset_hazards() {
    let building = Building::bundled().expect("bundled dataset parses");
    assert_bfs_matches_exhaustive(&building, &HazardState::new());

    let preset_names: Vec<String> = building
        .presets
        .iter()
        .map(|preset| preset.name.clone())
        .collect();
    for name in preset_names {
        let mut hazards = HazardState::new();
        hazards.apply_preset(&building, &name).expect("preset applies");
        assert_bfs_matches_exhaustive(&building, &hazards);
    }
}
