//! Graph input model.
//!
//! A graph is supplied as an ordered list of [`Node`]s. Each node names its
//! outgoing neighbors by id; [`Edge`]s are always derived from that adjacency
//! and never created on their own.
//!
//! Nodes deserialize from the document shape used by collaborative editors:
//!
//! ```
//! # use tether_core::graph::Node;
//! let json = r#"[
//!     {"id": "ingest", "out_node_id": "parse", "name": "Ingest"},
//!     {"id": "parse", "out_node_id": ["store", "index"]},
//!     {"id": "store"},
//!     {"id": "index"}
//! ]"#;
//!
//! let nodes: Vec<Node> = serde_json::from_str(json).unwrap();
//! assert_eq!(nodes[0].neighbors(), ["parse"]);
//! assert_eq!(nodes[1].neighbors(), ["store", "index"]);
//! assert!(nodes[2].neighbors().is_empty());
//! assert_eq!(nodes[0].label().name(), Some("Ingest"));
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// A graph node as provided by the caller.
///
/// Identity is the id: two nodes are equal when their ids are equal,
/// regardless of neighbors or label. A node with an empty id is invalid and
/// is ignored by the layout engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier. Missing ids deserialize as empty.
    #[serde(default)]
    id: String,

    /// Outgoing neighbor ids.
    #[serde(
        default,
        alias = "out_node_id",
        skip_serializing_if = "Neighbors::is_empty"
    )]
    out_neighbors: Neighbors,

    /// Display metadata, opaque to the layout.
    #[serde(flatten)]
    label: Label,
}

impl Node {
    /// Creates a node with no neighbors and an empty label.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            out_neighbors: Neighbors::default(),
            label: Label::default(),
        }
    }

    /// Adds one outgoing neighbor.
    pub fn with_neighbor(mut self, target: impl Into<String>) -> Self {
        self.out_neighbors.0.push(target.into());
        self
    }

    /// Adds several outgoing neighbors, in order.
    pub fn with_neighbors<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.out_neighbors
            .0
            .extend(targets.into_iter().map(Into::into));
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Outgoing neighbor ids in declaration order.
    pub fn neighbors(&self) -> &[String] {
        &self.out_neighbors.0
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// A node is valid when its id is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Outgoing neighbor list of a [`Node`].
///
/// Accepts `null`, a single id, or an array of ids when deserialized and
/// always normalizes to a sequence. A single empty-string id means "no
/// neighbor".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<RawNeighbors>", into = "Vec<String>")]
pub struct Neighbors(Vec<String>);

impl Neighbors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNeighbors {
    One(String),
    Many(Vec<String>),
}

impl From<Option<RawNeighbors>> for Neighbors {
    fn from(raw: Option<RawNeighbors>) -> Self {
        match raw {
            None => Self::default(),
            Some(RawNeighbors::One(id)) if id.is_empty() => Self::default(),
            Some(RawNeighbors::One(id)) => Self(vec![id]),
            Some(RawNeighbors::Many(ids)) => Self(ids),
        }
    }
}

impl From<Neighbors> for Vec<String> {
    fn from(neighbors: Neighbors) -> Self {
        neighbors.0
    }
}

/// Display metadata carried alongside a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A directed edge derived from node adjacency.
///
/// The id is `"<source>-<target>"`. Edges are not deduplicated, so several
/// edges may share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    id: String,
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}-{target}"),
            source,
            target,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
