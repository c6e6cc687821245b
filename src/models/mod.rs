//! Domain models for CIDR summaries.
//!
//! - address codec: text and integer forms of an address, ordering, masks
//! - [`CidrBlock`] - base address plus prefix length

mod cidr;
mod ipv4;

// Re-export public types
pub use cidr::CidrBlock;
pub(crate) use ipv4::prefix_mask;
pub use ipv4::{
    broadcast_addr, compare, cut_addr, from_u32, get_cidr_mask, parse_ipv4, to_text, to_u32,
    AddressError, MAX_LENGTH,
};
