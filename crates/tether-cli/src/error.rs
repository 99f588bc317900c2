//! Error types for the Tether CLI.
//!
//! [`CliError`] wraps every failure the command-line pipeline can hit, from
//! reading the input file to writing the layout back out.

use std::io;

use thiserror::Error;

use tether::LayoutError;

use crate::config::ConfigError;

/// The main error type for CLI operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the JSON source next to the parse error so the
/// report can point at the offending line and column.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid graph input: {err}")]
    Input { err: serde_json::Error, src: String },

    #[error("Failed to serialize layout: {0}")]
    Output(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl CliError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}
