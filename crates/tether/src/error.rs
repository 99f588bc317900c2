//! Error types for Tether operations.
//!
//! Malformed graph data is never an error: invalid nodes and dangling edges
//! are dropped and the layout degrades to a best-effort result. The
//! [`LayoutError`] variants cover the remaining failure modes, a rejected
//! configuration and a cancelled run.

use thiserror::Error;

/// The main error type for layout operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("Layout cancelled after {iteration} iterations")]
    Cancelled { iteration: usize },
}

impl LayoutError {
    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
