//! Dataset node listing.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::commands::load_building;
use crate::output;

/// Handle the nodes subcommand: list every node grouped by floor.
pub fn handle_nodes_command(dataset: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let building = load_building(dataset)?;
    output::render_nodes(out, &building)?;
    Ok(())
}
