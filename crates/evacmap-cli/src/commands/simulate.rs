//! Interactive hazard simulation loop.
//!
//! Reads one command per line from the input, mutates the hazard overlay,
//! and re-plans synchronously after every mutation, the same reactive flow
//! a graphical presenter would drive. The drill timer starts on the first
//! mutation and is reset together with the overlay.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use evacmap_lib::{plan_evacuation, Building, HazardKind, HazardState};

use crate::commands::load_building;
use crate::output;
use crate::timer::DrillTimer;

const HELP: &str = "\
Commands:
  block <node> [kind]   mark a node hazardous (kind defaults to selection)
  unblock <node>        clear a node hazard
  toggle <node>         flip a node hazard using the selected kind
  edge <a> <b>          block the edge between two nodes
  unedge <a> <b>        unblock an edge
  kind <k>              select the hazard kind (fire/smoke/flood/collapse)
  preset <name>         reset and apply a named scenario
  reset                 clear all hazards and the drill timer
  route [n]             show the route plus up to n alternatives
  status                show hazards, timer, and evacuability
  nodes                 list building nodes
  presets               list scenario presets
  quit                  leave the simulation";

/// Handle the simulate subcommand.
pub fn handle_simulate_command(
    dataset: Option<&Path>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let building = load_building(dataset)?;
    run(&building, input, out)
}

/// Drive the simulation loop over an arbitrary input/output pair.
pub fn run(building: &Building, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut hazards = HazardState::new();
    let mut timer = DrillTimer::new();
    let mut selected_kind = HazardKind::default();

    writeln!(out, "Simulating {}. Type 'help' for commands.", building.name)?;
    render_current_route(building, &hazards, out)?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let mut mutated = false;
        match (command, args.as_slice()) {
            ("quit", _) | ("exit", _) => break,
            ("help", _) => writeln!(out, "{HELP}")?,
            ("block", [node]) => {
                mutated = apply(building, &mut hazards, node, selected_kind, out)?;
            }
            ("block", [node, kind]) => match kind.parse::<HazardKind>() {
                Ok(kind) => {
                    mutated = apply(building, &mut hazards, node, kind, out)?;
                }
                Err(error) => writeln!(out, "warning: {error}")?,
            },
            ("unblock", [node]) => {
                mutated = hazards.remove(node);
            }
            ("toggle", [node]) => match hazards.toggle(building, node, selected_kind) {
                Ok(changed) => mutated = changed,
                Err(error) => writeln!(out, "warning: {error}")?,
            },
            ("edge", [a, b]) => {
                mutated = hazards.block_edge(building, a, b);
            }
            ("unedge", [a, b]) => {
                mutated = hazards.unblock_edge(a, b);
            }
            ("kind", [kind]) => match kind.parse::<HazardKind>() {
                Ok(kind) => {
                    selected_kind = kind;
                    writeln!(out, "Selected hazard kind: {selected_kind}")?;
                }
                Err(error) => writeln!(out, "warning: {error}")?,
            },
            ("preset", [name]) => match hazards.apply_preset(building, name) {
                Ok(()) => {
                    writeln!(out, "Applied preset '{name}'.")?;
                    mutated = true;
                }
                Err(error) => writeln!(out, "warning: {error}")?,
            },
            ("reset", _) => {
                hazards.reset();
                timer.reset();
                writeln!(out, "Hazards cleared; drill timer reset.")?;
                mutated = true;
            }
            ("route", []) => render_current_route(building, &hazards, out)?,
            ("route", [n]) => match n.parse::<usize>() {
                Ok(count) => {
                    let plan = plan_evacuation(building, &hazards, count + 1);
                    output::render_plan(out, building, &plan)?;
                }
                Err(_) => writeln!(out, "warning: route takes a number of alternatives")?,
            },
            ("status", _) => {
                writeln!(out, "Hazards: {}", output::hazard_summary(building, &hazards))?;
                writeln!(out, "Drill timer: {}", timer.display())?;
                render_current_route(building, &hazards, out)?;
            }
            ("nodes", _) => output::render_nodes(out, building)?,
            ("presets", _) => output::render_presets(out, building)?,
            _ => writeln!(out, "Unknown command '{line}'. Type 'help' for commands.")?,
        }

        if mutated {
            timer.start();
            render_current_route(building, &hazards, out)?;
        }
    }

    timer.stop();
    writeln!(out, "Simulation over after {}.", timer.display())?;
    Ok(())
}

fn apply(
    building: &Building,
    hazards: &mut HazardState,
    node: &str,
    kind: HazardKind,
    out: &mut impl Write,
) -> Result<bool> {
    match hazards.apply(building, node, kind) {
        Ok(changed) => Ok(changed),
        Err(error) => {
            writeln!(out, "warning: {error}")?;
            Ok(false)
        }
    }
}

fn render_current_route(
    building: &Building,
    hazards: &HazardState,
    out: &mut impl Write,
) -> Result<()> {
    let plan = plan_evacuation(building, hazards, 1);
    output::render_plan(out, building, &plan)?;
    Ok(())
}
