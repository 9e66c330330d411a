//! Mutable hazard overlay on top of an immutable [`Building`].
//!
//! `HazardState` is an explicit owned value; callers hold exactly one per
//! simulation and recompute the evacuation plan after each mutation. The
//! type is not synchronized: a concurrent embedding must serialize mutations
//! through a single owner.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::building::{Building, EdgeKey, NodeId};
use crate::error::{Error, Result};

/// Category tag attached to a blocked node. Purely descriptive: search only
/// cares about membership in the blocked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HazardKind {
    #[default]
    Fire,
    Smoke,
    Flood,
    Collapse,
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            HazardKind::Fire => "fire",
            HazardKind::Smoke => "smoke",
            HazardKind::Flood => "flood",
            HazardKind::Collapse => "collapse",
        };
        f.write_str(value)
    }
}

impl FromStr for HazardKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "fire" => Ok(HazardKind::Fire),
            "smoke" => Ok(HazardKind::Smoke),
            "flood" => Ok(HazardKind::Flood),
            "collapse" => Ok(HazardKind::Collapse),
            other => Err(Error::UnknownHazardKind {
                value: other.to_string(),
            }),
        }
    }
}

/// The set of currently impassable nodes and edges.
///
/// Invariants: the kind map and the blocked-node set always cover exactly the
/// same ids, and the building's start node is never blocked.
#[derive(Debug, Clone, Default)]
pub struct HazardState {
    blocked_nodes: HashSet<NodeId>,
    blocked_edges: HashSet<EdgeKey>,
    kinds: HashMap<NodeId, HazardKind>,
}

impl HazardState {
    /// Empty overlay: nothing blocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of currently blocked nodes.
    pub fn blocked_nodes(&self) -> &HashSet<NodeId> {
        &self.blocked_nodes
    }

    /// Canonical keys of currently blocked edges.
    pub fn blocked_edges(&self) -> &HashSet<EdgeKey> {
        &self.blocked_edges
    }

    /// Hazard category recorded for a blocked node.
    pub fn kind(&self, node: &str) -> Option<HazardKind> {
        self.kinds.get(node).copied()
    }

    pub fn is_node_blocked(&self, node: &str) -> bool {
        self.blocked_nodes.contains(node)
    }

    pub fn is_edge_blocked(&self, a: &str, b: &str) -> bool {
        !self.blocked_edges.is_empty() && self.blocked_edges.contains(&EdgeKey::new(a, b))
    }

    /// Whether nothing is blocked at all.
    pub fn is_empty(&self) -> bool {
        self.blocked_nodes.is_empty() && self.blocked_edges.is_empty()
    }

    /// Mark a node hazardous. Returns whether the overlay changed.
    ///
    /// The start node is protected: attempting to block it fails and leaves
    /// the state unchanged. Unknown node ids are ignored with a warning.
    /// Re-applying to an already-blocked node overwrites its recorded kind.
    pub fn apply(&mut self, building: &Building, node: &str, kind: HazardKind) -> Result<bool> {
        if node == building.start {
            return Err(Error::ProtectedStartNode {
                id: node.to_string(),
            });
        }
        if building.node(node).is_none() {
            warn!(node, "ignoring hazard on unknown node");
            return Ok(false);
        }
        self.blocked_nodes.insert(node.to_string());
        self.kinds.insert(node.to_string(), kind);
        Ok(true)
    }

    /// Clear the hazard on a node. Returns whether one was present.
    pub fn remove(&mut self, node: &str) -> bool {
        self.kinds.remove(node);
        self.blocked_nodes.remove(node)
    }

    /// Remove the hazard if present, otherwise apply one with `kind`.
    /// Returns whether the overlay changed.
    pub fn toggle(&mut self, building: &Building, node: &str, kind: HazardKind) -> Result<bool> {
        if self.is_node_blocked(node) {
            Ok(self.remove(node))
        } else {
            self.apply(building, node, kind)
        }
    }

    /// Mark the edge between `a` and `b` impassable. Returns whether the
    /// overlay changed.
    ///
    /// Unknown endpoints are ignored with a warning; the edge does not need
    /// to exist in the adjacency to be recorded (blocking a non-edge simply
    /// has no effect on search).
    pub fn block_edge(&mut self, building: &Building, a: &str, b: &str) -> bool {
        if building.node(a).is_none() || building.node(b).is_none() {
            warn!(from = a, to = b, "ignoring edge hazard with unknown endpoint");
            return false;
        }
        self.blocked_edges.insert(EdgeKey::new(a, b))
    }

    /// Clear the hazard on an edge. Returns whether one was present.
    pub fn unblock_edge(&mut self, a: &str, b: &str) -> bool {
        self.blocked_edges.remove(&EdgeKey::new(a, b))
    }

    /// Clear every blocked node and edge.
    pub fn reset(&mut self) {
        self.blocked_nodes.clear();
        self.blocked_edges.clear();
        self.kinds.clear();
    }

    /// Reset the overlay and apply a named scenario template.
    ///
    /// Preset nodes are recorded with the default hazard kind. Entries that
    /// name unknown nodes (or the protected start node) are skipped with a
    /// warning rather than failing the whole preset.
    pub fn apply_preset(&mut self, building: &Building, name: &str) -> Result<()> {
        let preset = building.preset(name).ok_or_else(|| Error::UnknownPreset {
            name: name.to_string(),
        })?;

        self.reset();
        for node in &preset.blocked_nodes {
            if let Err(error) = self.apply(building, node, HazardKind::default()) {
                warn!(node = %node, preset = name, %error, "skipping preset node");
            }
        }
        for (a, b) in &preset.blocked_edges {
            self.block_edge(building, a, b);
        }
        Ok(())
    }
}
