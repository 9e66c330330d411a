//! Evacmap library entry points.
//!
//! This crate loads a building evacuation dataset (nodes, edges, exits,
//! presets) into memory, tracks a mutable hazard overlay, and computes
//! shortest hazard-avoiding escape routes plus a bounded set of alternative
//! routes. Higher-level consumers (the CLI, future embedders) should only
//! depend on the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod building;
pub mod error;
pub mod hazard;
pub mod path;
pub mod preset;
pub mod routing;

pub use building::{Building, EdgeKey, Floor, Node, NodeId, NodeKind};
pub use error::{Error, Result};
pub use hazard::{HazardKind, HazardState};
pub use path::{find_alternative_routes, find_escape_route};
pub use preset::Preset;
pub use routing::{plan_evacuation, EscapeRoute, EvacuationPlan};
