//! Output formatting for aggregation results.
//!
//! - [`terminal`] - text and JSON rendering

mod terminal;

pub use terminal::{render, OutputFormat};
