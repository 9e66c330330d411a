#![allow(dead_code)]

use evacmap_lib::Building;
use serde_json::json;

/// Build a single-floor synthetic building from node and edge lists.
///
/// Nodes are given as `(id, kind)` pairs; labels are derived from the id.
/// Adjacency order follows the edge list, matching the loader's guarantee.
pub fn synthetic(
    start: &str,
    exits: &[&str],
    nodes: &[(&str, &str)],
    edges: &[(&str, &str)],
) -> Building {
    let document = json!({
        "name": "Synthetic",
        "start": start,
        "exits": exits,
        "nodes": nodes
            .iter()
            .map(|(id, kind)| json!({
                "id": id,
                "label": id,
                "floor": "ground",
                "kind": kind,
            }))
            .collect::<Vec<_>>(),
        "edges": edges
            .iter()
            .map(|(a, b)| json!([a, b]))
            .collect::<Vec<_>>(),
    });
    Building::from_json(&document.to_string()).expect("synthetic building parses")
}

/// Minimal chain: start S, interior A, exit B.
pub fn chain() -> Building {
    synthetic(
        "s",
        &["b"],
        &[("s", "control"), ("a", "corridor"), ("b", "exit")],
        &[("s", "a"), ("a", "b")],
    )
}

/// Diamond: start adjacent to A then B, both adjacent to
/// the exit.
pub fn diamond() -> Building {
    synthetic(
        "s",
        &["x"],
        &[
            ("s", "control"),
            ("a", "corridor"),
            ("b", "corridor"),
            ("x", "exit"),
        ],
        &[("s", "a"), ("s", "b"), ("a", "x"), ("b", "x")],
    )
}
