//! Address sources.
//!
//! - [`reader`] - one address per line from any buffered reader
//! - [`resolve`] - IPv4 addresses of a hostname

pub mod reader;
pub mod resolve;

pub use reader::{read_addresses, AddressLines, ReadError};
pub use resolve::{resolve_hostname, resolve_hostnames, ResolveError};
