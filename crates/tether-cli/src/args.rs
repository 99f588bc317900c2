//! Command-line argument definitions for the Tether CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, canvas overrides, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Tether layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON node list
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON layout file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Canvas width, overriding the configured value
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height, overriding the configured value
    #[arg(long)]
    pub height: Option<f64>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}
