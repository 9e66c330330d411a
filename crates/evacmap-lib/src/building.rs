//! Building dataset: nodes, derived adjacency, exits, and presets.
//!
//! The dataset is a JSON document with a flat node table and a flat edge
//! list. Adjacency is derived from the edge list at load time, symmetric by
//! construction, so a hand-authored document cannot forget a reverse edge.
//! Neighbor order within each adjacency list follows edge-list order, which
//! keeps breadth-first tie-breaking deterministic across runs.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::preset::Preset;

/// Unique key for a building node, e.g. `"g-lobby"`.
pub type NodeId = String;

/// Floor codes used by the building dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Floor {
    Basement,
    Ground,
    First,
    Second,
    Third,
}

impl Floor {
    /// Short display code, e.g. `"B"` or `"2"`.
    pub fn code(self) -> &'static str {
        match self {
            Floor::Basement => "B",
            Floor::Ground => "G",
            Floor::First => "1",
            Floor::Second => "2",
            Floor::Third => "3",
        }
    }

    /// All floors in bottom-to-top order.
    pub fn all() -> [Floor; 5] {
        [
            Floor::Basement,
            Floor::Ground,
            Floor::First,
            Floor::Second,
            Floor::Third,
        ]
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Floor::Basement => "basement",
            Floor::Ground => "ground",
            Floor::First => "first",
            Floor::Second => "second",
            Floor::Third => "third",
        };
        f.write_str(value)
    }
}

/// Classification of a building node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Room,
    Corridor,
    Stair,
    Control,
    Exit,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeKind::Room => "room",
            NodeKind::Corridor => "corridor",
            NodeKind::Stair => "stair",
            NodeKind::Control => "control",
            NodeKind::Exit => "exit",
        };
        f.write_str(value)
    }
}

/// A single location in the building. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub floor: Floor,
    pub kind: NodeKind,
}

/// Canonical key for an undirected edge.
///
/// Construction orders the endpoints, so `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` compare and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    a: NodeId,
    b: NodeId,
}

impl EdgeKey {
    /// Build the canonical key for the edge between `x` and `y`.
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }

    /// The two endpoints in canonical order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

/// On-disk shape of the dataset document.
#[derive(Debug, Deserialize)]
struct BuildingDocument {
    name: String,
    start: NodeId,
    exits: Vec<NodeId>,
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
    #[serde(default)]
    presets: Vec<Preset>,
}

/// In-memory representation of the building graph.
#[derive(Debug, Clone)]
pub struct Building {
    pub name: String,
    pub nodes: HashMap<NodeId, Node>,
    pub adjacency: HashMap<NodeId, Vec<NodeId>>,
    pub exits: Vec<NodeId>,
    pub start: NodeId,
    pub presets: Vec<Preset>,
}

/// Default dataset bundled with the library: a five-floor office building
/// with 45 nodes, three exits, and a handful of hazard presets.
const BUNDLED_DATASET: &str = include_str!("../data/harrowgate_house.json");

impl Building {
    /// Parse a building dataset from a JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        let doc: BuildingDocument = serde_json::from_str(document)?;

        let mut nodes: HashMap<NodeId, Node> = HashMap::with_capacity(doc.nodes.len());
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(doc.nodes.len());
        for node in doc.nodes {
            if nodes.contains_key(&node.id) {
                return Err(Error::DuplicateNode { id: node.id });
            }
            adjacency.insert(node.id.clone(), Vec::new());
            nodes.insert(node.id.clone(), node);
        }

        if !nodes.contains_key(&doc.start) {
            return Err(Error::UnknownNode {
                id: doc.start,
                context: "start".to_string(),
            });
        }

        if doc.exits.is_empty() {
            return Err(Error::NoExits);
        }
        for exit in &doc.exits {
            match nodes.get(exit) {
                None => {
                    return Err(Error::UnknownNode {
                        id: exit.clone(),
                        context: "exits".to_string(),
                    })
                }
                Some(node) if node.kind != NodeKind::Exit => {
                    return Err(Error::InvalidExit { id: exit.clone() });
                }
                Some(_) => {}
            }
        }

        let mut seen_edges: HashSet<EdgeKey> = HashSet::with_capacity(doc.edges.len());
        for (a, b) in &doc.edges {
            for endpoint in [a, b] {
                if !nodes.contains_key(endpoint) {
                    return Err(Error::UnknownNode {
                        id: endpoint.clone(),
                        context: "edges".to_string(),
                    });
                }
            }
            if a == b {
                warn!(node = %a, "ignoring self-loop edge in dataset");
                continue;
            }
            if !seen_edges.insert(EdgeKey::new(a, b)) {
                warn!(edge = %EdgeKey::new(a, b), "ignoring duplicate edge in dataset");
                continue;
            }
            adjacency.entry(a.clone()).or_default().push(b.clone());
            adjacency.entry(b.clone()).or_default().push(a.clone());
        }

        debug!(
            name = %doc.name,
            nodes = nodes.len(),
            edges = seen_edges.len(),
            exits = doc.exits.len(),
            presets = doc.presets.len(),
            "building dataset loaded"
        );

        Ok(Self {
            name: doc.name,
            nodes,
            adjacency,
            exits: doc.exits,
            start: doc.start,
            presets: doc.presets,
        })
    }

    /// Read a dataset document from disk and parse it.
    pub fn load(path: &Path) -> Result<Self> {
        let document = fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Parse the dataset bundled with the library.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Lookup a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Display label for a node, falling back to the raw id when unknown.
    pub fn node_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes.get(id).map(|node| node.label.as_str()).unwrap_or(id)
    }

    /// Return the neighbours for a given node id.
    pub fn neighbours(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the given node id is an evacuation terminus.
    pub fn is_exit(&self, id: &str) -> bool {
        self.exits.iter().any(|exit| exit == id)
    }

    /// Lookup a preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Nodes on a given floor, sorted by id.
    pub fn nodes_on_floor(&self, floor: Floor) -> Vec<&Node> {
        let mut on_floor: Vec<&Node> = self
            .nodes
            .values()
            .filter(|node| node.floor == floor)
            .collect();
        on_floor.sort_by(|a, b| a.id.cmp(&b.id));
        on_floor
    }
}
