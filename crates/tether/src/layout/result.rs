//! Final layout snapshot handed to the caller.

use indexmap::IndexMap;
use serde::Serialize;

use tether_core::{geometry::Point, graph::Edge};

use crate::structure::GraphArena;

use super::simulation::Position;

/// Final node positions of one layout call.
///
/// Holds one entry per valid input node id, in first-appearance order, with
/// velocities discarded. Also carries the edges whose endpoints both have a
/// position, for the renderer to draw.
///
/// Serializes as:
///
/// ```json
/// {"positions": {"a": {"x": 80.0, "y": 80.0}}, "edges": [{"id": "a-b", ...}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    positions: IndexMap<String, Point>,
    edges: Vec<Edge>,
}

impl LayoutResult {
    /// Pairs arena ids with simulated positions.
    pub(crate) fn from_arena(arena: &GraphArena<'_>, positions: &[Position]) -> Self {
        Self {
            positions: arena
                .node_ids()
                .zip(positions)
                .map(|(id, position)| (id.to_string(), position.point()))
                .collect(),
            edges: arena.edges().cloned().collect(),
        }
    }

    /// Returns the position of a node, if it was laid out.
    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Returns true if the node was laid out.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates `(id, position)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions
            .iter()
            .map(|(id, point)| (id.as_str(), *point))
    }

    /// Edges between positioned nodes, in derivation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consumes the result, returning the position map.
    pub fn into_positions(self) -> IndexMap<String, Point> {
        self.positions
    }
}
