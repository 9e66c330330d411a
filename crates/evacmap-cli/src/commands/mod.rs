//! Command handlers for the evacmap CLI.

pub mod nodes;
pub mod presets;
pub mod route;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use evacmap_lib::Building;

/// Load the dataset named on the command line, or the bundled building.
pub fn load_building(dataset: Option<&Path>) -> Result<Building> {
    match dataset {
        Some(path) => Building::load(path)
            .with_context(|| format!("failed to load dataset from {}", path.display())),
        None => Building::bundled().context("failed to parse the bundled dataset"),
    }
}
