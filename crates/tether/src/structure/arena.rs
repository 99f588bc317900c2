//! Index-addressed graph arena used by the simulation.
//!
//! The arena is built once per layout call from the raw node list:
//! - Nodes with an empty id are dropped.
//! - Each distinct id gets one slot, in first-appearance order. The slot's
//!   seed index is the position of the id's *last* occurrence among the valid
//!   nodes, so a repeated id behaves like a map overwrite.
//! - Derived edges survive only when both endpoints have a slot.
//!
//! Slots are `petgraph` node indices; the simulation stores one position per
//! slot in a plain vector addressed by `NodeIndex::index()`.

use std::collections::HashMap;

use log::debug;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use tether_core::graph::{Edge, Node};

use super::build_edges;

/// Directed graph of the valid nodes and their surviving edges.
#[derive(Debug)]
pub(crate) struct GraphArena<'a> {
    graph: DiGraph<&'a str, Edge>,
    seed_indices: Vec<usize>,
}

impl<'a> GraphArena<'a> {
    /// Builds the arena from an input node list.
    pub(crate) fn from_nodes(nodes: &'a [Node]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), 0);
        let mut slots: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut seed_indices = Vec::with_capacity(nodes.len());

        let valid_nodes = nodes.iter().filter(|node| {
            if !node.is_valid() {
                debug!(label:? = node.label(); "Dropping node without an id");
            }
            node.is_valid()
        });

        for (seed_index, node) in valid_nodes.enumerate() {
            match slots.get(node.id()) {
                Some(&slot) => {
                    debug!(node_id = node.id(); "Duplicate node id, last occurrence wins");
                    seed_indices[slot.index()] = seed_index;
                }
                None => {
                    let slot = graph.add_node(node.id());
                    slots.insert(node.id(), slot);
                    seed_indices.push(seed_index);
                }
            }
        }

        for edge in build_edges(nodes) {
            match (slots.get(edge.source()), slots.get(edge.target())) {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, edge);
                }
                _ => {
                    debug!(edge_id = edge.id(); "Dropping dangling edge");
                }
            }
        }

        Self {
            graph,
            seed_indices,
        }
    }

    /// Returns the number of node slots.
    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of surviving edges.
    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in slot order.
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.node_weights().copied()
    }

    /// Node ids paired with their seed index, in slot order.
    pub(crate) fn seeds(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.node_ids().zip(self.seed_indices.iter().copied())
    }

    /// Surviving edges in derivation order.
    pub(crate) fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Slot pairs `(source, target)` of the surviving edges, in derivation order.
    pub(crate) fn springs(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
            .collect()
    }
}
