//! Named hazard scenario templates shipped with the building dataset.

use serde::{Deserialize, Serialize};

use crate::building::NodeId;

/// An immutable scenario template: applying it resets the hazard overlay and
/// then blocks the listed nodes and edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub blocked_nodes: Vec<NodeId>,
    #[serde(default)]
    pub blocked_edges: Vec<(NodeId, NodeId)>,
}
