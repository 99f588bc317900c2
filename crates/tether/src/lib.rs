//! Tether - Deterministic force-directed layout for directed graphs.
//!
//! Converts an ordered list of nodes, each naming its outgoing neighbors, into
//! 2D canvas coordinates. The same input always produces the same output: seed
//! positions come from a hash of each node id rather than a random source, the
//! simulation runs a fixed number of iterations, and every position is clamped
//! into the canvas after each step.
//!
//! Malformed graph data never fails a layout. Nodes without an id are
//! skipped, edges to unknown nodes are dropped, and a repeated id keeps a
//! single position.

pub mod config;
pub mod layout;

mod error;
mod structure;

pub use tether_core::{geometry, graph};

pub use error::LayoutError;
pub use layout::{CancelToken, LayoutResult};
pub use structure::build_edges;

use log::{debug, info};

use config::LayoutConfig;
use graph::Node;
use layout::Simulation;
use structure::GraphArena;

/// Computes a layout on the default 2000×2000 canvas.
///
/// # Examples
///
/// ```
/// use tether::{compute_layout, graph::Node};
///
/// let nodes = [Node::new("a").with_neighbor("b"), Node::new("b")];
/// let layout = compute_layout(&nodes);
///
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.edges().len(), 1);
/// ```
pub fn compute_layout(nodes: &[Node]) -> LayoutResult {
    LayoutEngine::default().compute_layout(nodes)
}

/// Computes a layout on a `width` × `height` canvas with default forces.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidConfig`] when the canvas is not positive and
/// finite or is too small for the default margin.
///
/// # Examples
///
/// ```
/// use tether::{compute_layout_with_size, graph::Node};
///
/// let layout = compute_layout_with_size(&[Node::new("a")], 800.0, 600.0)
///     .expect("valid canvas");
/// let point = layout.get("a").expect("node laid out");
/// assert!(point.x() <= 720.0 && point.y() <= 520.0);
/// ```
pub fn compute_layout_with_size(
    nodes: &[Node],
    width: f64,
    height: f64,
) -> Result<LayoutResult, LayoutError> {
    let config = LayoutConfig::default().with_canvas_size(width, height);
    Ok(LayoutEngine::new(config)?.compute_layout(nodes))
}

/// Configured layout engine.
///
/// The engine holds only its validated configuration. Every call builds its
/// own arena, so one engine can serve any number of calls, including
/// concurrent ones from different threads.
///
/// # Examples
///
/// ```
/// use tether::{LayoutEngine, config::LayoutConfig, graph::Node};
///
/// let engine = LayoutEngine::new(LayoutConfig::default().with_iterations(50))
///     .expect("valid config");
///
/// let nodes = [
///     Node::new("ingest").with_neighbor("parse"),
///     Node::new("parse").with_neighbor("store"),
///     Node::new("store"),
/// ];
/// let layout = engine.compute_layout(&nodes);
/// assert_eq!(layout.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a new layout engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if the configuration fails
    /// [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `nodes` and returns the final positions.
    ///
    /// This builds the edge set, seeds every valid node, runs the full
    /// simulation and strips velocities from the result.
    pub fn compute_layout(&self, nodes: &[Node]) -> LayoutResult {
        let arena = GraphArena::from_nodes(nodes);
        let mut simulation = self.start(&arena, nodes.len());

        simulation.run();

        self.finish(&arena, &simulation)
    }

    /// Like [`compute_layout`](Self::compute_layout), but stops early when
    /// `token` is cancelled.
    ///
    /// The token is polled every `cancel_check_interval` iterations. A run
    /// that is never cancelled returns exactly what `compute_layout` returns.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Cancelled`] if the token was set at a check.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether::{CancelToken, LayoutEngine, LayoutError, graph::Node};
    ///
    /// let token = CancelToken::new();
    /// token.cancel();
    ///
    /// let result = LayoutEngine::default()
    ///     .compute_layout_cancellable(&[Node::new("a")], &token);
    /// assert_eq!(result, Err(LayoutError::Cancelled { iteration: 0 }));
    /// ```
    pub fn compute_layout_cancellable(
        &self,
        nodes: &[Node],
        token: &CancelToken,
    ) -> Result<LayoutResult, LayoutError> {
        let arena = GraphArena::from_nodes(nodes);
        let mut simulation = self.start(&arena, nodes.len());

        simulation.run_cancellable(token)?;

        Ok(self.finish(&arena, &simulation))
    }

    fn start(&self, arena: &GraphArena<'_>, input_count: usize) -> Simulation {
        info!(
            input_nodes = input_count,
            nodes = arena.node_count(),
            edges = arena.edge_count();
            "Computing layout"
        );

        let canvas = self.config.canvas().size();
        let seeds = arena
            .seeds()
            .map(|(id, index)| layout::seed_position(id, index, canvas))
            .collect();

        Simulation::new(seeds, arena.springs(), &self.config)
    }

    fn finish(&self, arena: &GraphArena<'_>, simulation: &Simulation) -> LayoutResult {
        let result = LayoutResult::from_arena(arena, simulation.positions());
        debug!(iterations = simulation.iteration(); "Simulation finished");
        info!(positions = result.len(); "Layout computed");
        result
    }
}
