//! Graph structure derived from the input node list.
//!
//! - [`builder`] derives the edge list from each node's outgoing neighbors.
//! - [`arena`] drops invalid nodes and dangling edges and assigns every
//!   remaining node a stable arena index for the simulation.

mod arena;
mod builder;

pub(crate) use arena::GraphArena;
pub use builder::build_edges;
