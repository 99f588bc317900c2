//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting. Input errors carry the JSON
//! source, so the rendered report underlines the position serde_json gave up
//! at.

use std::{error::Error, fmt, iter};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use tether::LayoutError;

use crate::CliError;

/// Adapter rendering a [`CliError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "tether::io",
            CliError::Input { .. } => "tether::input",
            CliError::Output(_) => "tether::output",
            CliError::Config(_) => "tether::config",
            CliError::Layout(_) => "tether::layout",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CliError::Input { .. } => {
                r#"expected a JSON array of nodes, e.g. [{"id": "a", "out_node_id": ["b"]}]"#
            }
            CliError::Layout(LayoutError::InvalidConfig(_)) => {
                "check the [layout] section of the configuration file and the --width/--height flags"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            CliError::Input { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Input { err, src } = &self.0 else {
            return None;
        };
        let span = json_error_span(err, src)?;
        let label = LabeledSpan::new_primary_with_span(Some(err_summary(err)), span);
        Some(Box::new(iter::once(label)))
    }
}

/// Convert a [`CliError`] into something miette can render.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

/// Short label text for the error position.
fn err_summary(err: &serde_json::Error) -> String {
    match err.classify() {
        serde_json::error::Category::Syntax => "invalid JSON here".to_string(),
        serde_json::error::Category::Eof => "input ends here".to_string(),
        serde_json::error::Category::Data => "unexpected value here".to_string(),
        serde_json::error::Category::Io => "read failed here".to_string(),
    }
}

/// Locate a serde_json error in its source.
///
/// serde_json reports a one-based line and column; line 0 means the error
/// has no position.
fn json_error_span(err: &serde_json::Error, src: &str) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(err.line() - 1)
        .map(str::len)
        .sum();
    let mut offset = (line_start + err.column().saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }

    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    Some(SourceSpan::new(offset.into(), len))
}
