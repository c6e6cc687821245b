//! IPv4 address codec and mask utilities.
//!
//! Addresses are carried as [`Ipv4Addr`]; its `u32` form is the big-endian
//! concatenation of the four octets.

use std::cmp::Ordering;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Errors raised while decoding addresses and blocks from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid IPv4 address {input:?}")]
    Invalid { input: String },
    #[error("network length /{len} is too long")]
    PrefixTooLong { len: u8 },
    #[error("invalid CIDR format {input:?}")]
    InvalidCidr { input: String },
}

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four decimal octets in `0..=255` are accepted. Whitespace, leading
/// zeros and any other variant are rejected rather than coerced.
///
/// # Examples
/// ```
/// use cidr_summary::models::parse_ipv4;
/// assert_eq!(parse_ipv4("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_ipv4(" 10.0.0.1").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, AddressError> {
    // std rejects whitespace, signs, leading zeros and short forms.
    Ipv4Addr::from_str(text).map_err(|_| AddressError::Invalid {
        input: text.to_string(),
    })
}

/// Encode an address as `o0<<24 | o1<<16 | o2<<8 | o3`.
pub fn to_u32(addr: Ipv4Addr) -> u32 {
    let [o0, o1, o2, o3] = addr.octets();
    (o0 as u32) << 24 | (o1 as u32) << 16 | (o2 as u32) << 8 | o3 as u32
}

/// Inverse of [`to_u32`].
pub fn from_u32(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_be_bytes())
}

/// Canonical dotted-decimal text for an encoded address.
pub fn to_text(value: u32) -> String {
    from_u32(value).to_string()
}

/// Compare two addresses octet by octet, most significant first.
pub fn compare(a: &Ipv4Addr, b: &Ipv4Addr) -> Ordering {
    a.octets().cmp(&b.octets())
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong { len })
    } else {
        Ok(prefix_mask(len))
    }
}

/// Mask for a prefix length already known to be at most [`MAX_LENGTH`].
pub(crate) fn prefix_mask(len: u8) -> u32 {
    let right_len = (MAX_LENGTH - len.min(MAX_LENGTH)) as u32;
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    Ok(from_u32(to_u32(addr) & mask))
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = to_u32(addr) & mask;
    Ok(from_u32(network_bits | !mask))
}
