//! Example: Lay out a small service graph built in code
//!
//! This example shows how to describe a graph with the `Node` builder,
//! configure the engine, and read back the computed positions.
//!
//! Run with: `cargo run --example from_nodes -p tether`

use tether::{LayoutEngine, LayoutError, config::LayoutConfig, graph::Node};

fn main() -> Result<(), LayoutError> {
    // Each node names its outgoing neighbors by id
    let nodes = vec![
        Node::new("gateway").with_neighbors(["auth", "catalog"]),
        Node::new("auth").with_neighbor("users"),
        Node::new("catalog").with_neighbors(["inventory", "search"]),
        Node::new("inventory"),
        Node::new("search").with_neighbor("inventory"),
        Node::new("users"),
        // Dangling target: the edge is dropped, the node is kept
        Node::new("billing").with_neighbor("ledger"),
    ];

    let config = LayoutConfig::default().with_canvas_size(1200.0, 900.0);
    let engine = LayoutEngine::new(config)?;

    let layout = engine.compute_layout(&nodes);

    println!("Positions:");
    for (id, point) in layout.iter() {
        println!("  {id:<10} ({:>8.2}, {:>8.2})", point.x(), point.y());
    }

    println!();
    println!("Edges:");
    for edge in layout.edges() {
        println!("  {edge}");
    }

    Ok(())
}
