//! Output formatting for plans, node listings, and presets.

use std::io::{self, Write};

use evacmap_lib::{Building, EvacuationPlan, Floor, HazardState};

/// Render a single route as `Label (floor) -> Label (floor) -> ...`.
pub fn route_line(building: &Building, steps: &[String]) -> String {
    steps
        .iter()
        .map(|id| {
            let label = building.node_label(id);
            match building.node(id) {
                Some(node) => format!("{} [{}]", label, node.floor.code()),
                None => label.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a plan as human-readable text.
pub fn render_plan(
    out: &mut impl Write,
    building: &Building,
    plan: &EvacuationPlan,
) -> io::Result<()> {
    match &plan.primary {
        Some(route) => {
            writeln!(
                out,
                "Route ({} hops): {}",
                route.hop_count(),
                route_line(building, &route.steps)
            )?;
            for (index, alternative) in plan.alternatives.iter().enumerate() {
                writeln!(
                    out,
                    "Alternative {} ({} hops): {}",
                    index + 1,
                    alternative.hop_count(),
                    route_line(building, &alternative.steps)
                )?;
            }
        }
        None => {
            writeln!(out, "Evacuation failed: no passable route to an exit.")?;
        }
    }
    Ok(())
}

/// Render a plan as pretty-printed JSON.
pub fn render_plan_json(out: &mut impl Write, plan: &EvacuationPlan) -> io::Result<()> {
    let json = serde_json::to_string_pretty(plan).map_err(io::Error::other)?;
    writeln!(out, "{json}")
}

/// Render the current hazard overlay in one line.
pub fn hazard_summary(building: &Building, hazards: &HazardState) -> String {
    if hazards.is_empty() {
        return "no hazards".to_string();
    }
    let mut nodes: Vec<String> = hazards
        .blocked_nodes()
        .iter()
        .map(|id| {
            let kind = hazards
                .kind(id)
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("{} ({kind})", building.node_label(id))
        })
        .collect();
    nodes.sort();
    let mut edges: Vec<String> = hazards
        .blocked_edges()
        .iter()
        .map(|key| {
            let (a, b) = key.endpoints();
            format!("{} -- {}", building.node_label(a), building.node_label(b))
        })
        .collect();
    edges.sort();

    let mut parts = Vec::new();
    if !nodes.is_empty() {
        parts.push(format!("blocked nodes: {}", nodes.join(", ")));
    }
    if !edges.is_empty() {
        parts.push(format!("blocked edges: {}", edges.join(", ")));
    }
    parts.join("; ")
}

/// List every node grouped by floor.
pub fn render_nodes(out: &mut impl Write, building: &Building) -> io::Result<()> {
    writeln!(out, "{}", building.name)?;
    for floor in Floor::all() {
        let nodes = building.nodes_on_floor(floor);
        if nodes.is_empty() {
            continue;
        }
        writeln!(out, "Floor {} ({floor}):", floor.code())?;
        for node in nodes {
            let marker = if node.id == building.start {
                " (start)"
            } else if building.is_exit(&node.id) {
                " (exit)"
            } else {
                ""
            };
            writeln!(out, "  {} - {} [{}]{}", node.id, node.label, node.kind, marker)?;
        }
    }
    Ok(())
}

/// List preset names and descriptions.
pub fn render_presets(out: &mut impl Write, building: &Building) -> io::Result<()> {
    if building.presets.is_empty() {
        writeln!(out, "No presets in this dataset.")?;
        return Ok(());
    }
    for preset in &building.presets {
        writeln!(out, "{} - {}", preset.name, preset.description)?;
    }
    Ok(())
}
