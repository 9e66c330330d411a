use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use evacmap_cli::commands::{
    nodes::handle_nodes_command,
    presets::handle_presets_command,
    route::{handle_route_command, RouteCommandArgs},
    simulate::handle_simulate_command,
};
use evacmap_lib::HazardKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evacuation route planning and hazard simulation")]
struct Cli {
    /// Override the building dataset file (defaults to the bundled building).
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute an evacuation route under a staged hazard overlay.
    Route {
        /// Node id to block; may be repeated.
        #[arg(long = "block")]
        block: Vec<String>,
        /// Hazard kind recorded for blocked nodes.
        #[arg(long, default_value = "fire", value_parser = parse_hazard_kind)]
        kind: HazardKind,
        /// Edge to block, written as a:b; may be repeated.
        #[arg(long = "block-edge")]
        block_edge: Vec<String>,
        /// Apply a named preset before individual blocks.
        #[arg(long)]
        preset: Option<String>,
        /// Number of alternative routes to compute.
        #[arg(long, default_value_t = 0)]
        alternatives: usize,
        /// Emit the plan as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List building nodes grouped by floor.
    Nodes,
    /// List hazard scenario presets.
    Presets,
    /// Run the interactive hazard simulation loop on stdin.
    Simulate,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Route {
            block,
            kind,
            block_edge,
            preset,
            alternatives,
            json,
        } => {
            let args = RouteCommandArgs {
                block,
                kind,
                block_edge,
                preset,
                alternatives,
                json,
            };
            handle_route_command(dataset, &args, &mut stdout)
        }
        Command::Nodes => handle_nodes_command(dataset, &mut stdout),
        Command::Presets => handle_presets_command(dataset, &mut stdout),
        Command::Simulate => {
            let stdin = BufReader::new(io::stdin().lock());
            handle_simulate_command(dataset, stdin, &mut stdout)
        }
    }
}

fn parse_hazard_kind(value: &str) -> Result<HazardKind, String> {
    value.parse::<HazardKind>().map_err(|error| error.to_string())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
