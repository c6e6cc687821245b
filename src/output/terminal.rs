//! Terminal output.
//!
//! The result goes to stdout as a single line; diagnostics never do.

use crate::processing::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bare `A.B.C.D/N`.
    #[default]
    Text,
    /// One JSON object with the block and the input extremes.
    Json,
}

/// Render `summary` without a trailing newline.
///
/// # Arguments
/// * `summary` - The aggregation result
/// * `format` - Text or JSON
pub fn render(summary: &Summary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(summary.cidr.to_string()),
        OutputFormat::Json => serde_json::to_string(summary),
    }
}
