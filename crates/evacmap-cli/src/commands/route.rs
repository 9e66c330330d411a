//! One-shot route computation under a staged hazard overlay.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};
use tracing::warn;

use evacmap_lib::{
    plan_evacuation, Building, Error as LibError, HazardKind, HazardState,
};

use crate::commands::load_building;
use crate::output;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Node ids to block before planning.
    pub block: Vec<String>,
    /// Hazard kind recorded for the blocked nodes.
    pub kind: HazardKind,
    /// Edges to block, each written as `a:b`.
    pub block_edge: Vec<String>,
    /// Preset applied before individual blocks.
    pub preset: Option<String>,
    /// Number of alternative routes to compute in addition to the primary.
    pub alternatives: usize,
    /// Emit the plan as JSON instead of text.
    pub json: bool,
}

/// Handle the route subcommand.
///
/// An unevacuable building is an expected outcome: the failure message goes
/// to stdout and the process still exits successfully.
pub fn handle_route_command(
    dataset: Option<&Path>,
    args: &RouteCommandArgs,
    out: &mut impl Write,
) -> Result<()> {
    let building = load_building(dataset)?;
    let mut hazards = HazardState::new();
    stage_hazards(&building, &mut hazards, args)?;

    let plan = plan_evacuation(&building, &hazards, args.alternatives + 1);
    if args.json {
        output::render_plan_json(out, &plan)?;
    } else {
        output::render_plan(out, &building, &plan)?;
    }
    Ok(())
}

/// Apply the preset and the individual node/edge blocks from the arguments.
pub fn stage_hazards(
    building: &Building,
    hazards: &mut HazardState,
    args: &RouteCommandArgs,
) -> Result<()> {
    if let Some(name) = &args.preset {
        hazards.apply_preset(building, name)?;
    }
    for node in &args.block {
        match hazards.apply(building, node, args.kind) {
            Ok(_) => {}
            Err(error @ LibError::ProtectedStartNode { .. }) => {
                warn!(%error, "rejected hazard");
                eprintln!("warning: {error}");
            }
            Err(error) => return Err(error.into()),
        }
    }
    for edge in &args.block_edge {
        let (a, b) = parse_edge(edge)?;
        hazards.block_edge(building, a, b);
    }
    Ok(())
}

/// Parse an `a:b` edge argument.
pub fn parse_edge(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once(':') {
        Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => bail!("invalid edge '{arg}': expected the form node-a:node-b"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edge_splits_on_colon() {
        assert_eq!(parse_edge("g-lobby:g-main-exit").unwrap(), ("g-lobby", "g-main-exit"));
    }

    #[test]
    fn parse_edge_rejects_missing_endpoint() {
        assert!(parse_edge("g-lobby").is_err());
        assert!(parse_edge("g-lobby:").is_err());
        assert!(parse_edge(":g-lobby").is_err());
    }
}
