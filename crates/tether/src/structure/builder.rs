//! Edge derivation from node adjacency.

use log::trace;

use tether_core::graph::{Edge, Node};

/// Derives the directed edge list of a graph.
///
/// Emits one [`Edge`] per outgoing neighbor id, in node order and then
/// neighbor order. Targets are not checked against the node set, so the
/// result may contain dangling edges; duplicates are kept as-is. Nodes with an
/// empty id contribute no edges.
///
/// # Examples
///
/// ```
/// # use tether::{build_edges, graph::Node};
/// let nodes = [
///     Node::new("a").with_neighbors(["b", "missing"]),
///     Node::new("b"),
/// ];
///
/// let ids: Vec<_> = build_edges(&nodes).iter().map(|e| e.id().to_string()).collect();
/// assert_eq!(ids, ["a-b", "a-missing"]);
/// ```
pub fn build_edges(nodes: &[Node]) -> Vec<Edge> {
    let edges: Vec<Edge> = nodes
        .iter()
        .filter(|node| node.is_valid())
        .flat_map(|node| {
            node.neighbors()
                .iter()
                .map(|target| Edge::new(node.id(), target.as_str()))
        })
        .collect();

    trace!(edge_count = edges.len(); "Derived edges from adjacency");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_ids(edges: &[Edge]) -> Vec<&str> {
        edges.iter().map(Edge::id).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(build_edges(&[]).is_empty());
    }

    #[test]
    fn test_chain() {
        let nodes = [
            Node::new("1").with_neighbor("2"),
            Node::new("2").with_neighbor("3"),
            Node::new("3").with_neighbor("4"),
            Node::new("4"),
        ];

        let edges = build_edges(&nodes);
        assert_eq!(edge_ids(&edges), ["1-2", "2-3", "3-4"]);
        assert_eq!(edges[0].source(), "1");
        assert_eq!(edges[0].target(), "2");
    }

    #[test]
    fn test_keeps_dangling_targets() {
        let nodes = [Node::new("X").with_neighbor("Y")];
        assert_eq!(edge_ids(&build_edges(&nodes)), ["X-Y"]);
    }

    #[test]
    fn test_keeps_duplicates_and_self_loops() {
        let nodes = [
            Node::new("a").with_neighbors(["b", "b", "a"]),
            Node::new("a").with_neighbor("b"),
            Node::new("b"),
        ];
        assert_eq!(
            edge_ids(&build_edges(&nodes)),
            ["a-b", "a-b", "a-a", "a-b"]
        );
    }

    #[test]
    fn test_skips_invalid_sources() {
        let nodes = [Node::new("").with_neighbor("b"), Node::new("b")];
        assert!(build_edges(&nodes).is_empty());
    }
}
