//! Address set processing.
//!
//! - [`aggregate`] - smallest covering CIDR block for a set of addresses

mod aggregate;

// Re-export public functions
pub use aggregate::{aggregate, common_prefix_len, summarize, AggregateError, Summary};
