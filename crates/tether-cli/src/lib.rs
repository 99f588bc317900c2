//! CLI logic for the Tether layout tool.
//!
//! Reads a JSON array of nodes, lays it out with [`tether::LayoutEngine`],
//! and writes the resulting positions and edges as JSON.

pub mod config;
pub mod error_adapter;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::{debug, info};

use tether::{LayoutEngine, LayoutResult, config::LayoutConfig, graph::Node};

/// Run the Tether CLI application
///
/// This function loads the configuration, lays out the input graph and
/// writes the JSON result to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON input
/// - Invalid layout configuration
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let layout_config = apply_overrides(app_config.into_layout(), args);
    let engine = LayoutEngine::new(layout_config)?;

    let source = fs::read_to_string(&args.input)?;
    let nodes = parse_nodes(&source)?;
    debug!(nodes = nodes.len(); "Parsed input graph");

    let layout = engine.compute_layout(&nodes);
    let json = render_json(&layout, args.pretty)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output, positions = layout.len(); "Layout exported successfully");

    Ok(())
}

/// Parse the input document into a node list.
fn parse_nodes(source: &str) -> Result<Vec<Node>, CliError> {
    serde_json::from_str(source).map_err(|err| CliError::new_input_error(err, source))
}

/// Apply `--width`/`--height` on top of the loaded canvas size.
fn apply_overrides(config: LayoutConfig, args: &Args) -> LayoutConfig {
    if args.width.is_none() && args.height.is_none() {
        return config;
    }

    let width = args.width.unwrap_or(config.canvas().width());
    let height = args.height.unwrap_or(config.canvas().height());
    debug!(width, height; "Overriding canvas size");
    config.with_canvas_size(width, height)
}

fn render_json(layout: &LayoutResult, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(layout)
    } else {
        serde_json::to_string(layout)
    };
    json.map_err(CliError::Output)
}
