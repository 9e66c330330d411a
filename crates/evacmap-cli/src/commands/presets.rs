//! Preset listing.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::commands::load_building;
use crate::output;

/// Handle the presets subcommand: list scenario names and descriptions.
pub fn handle_presets_command(dataset: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let building = load_building(dataset)?;
    output::render_presets(out, &building)?;
    Ok(())
}
