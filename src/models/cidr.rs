//! CIDR block: a base address plus a prefix length.

use super::ipv4::{
    cut_addr, from_u32, parse_ipv4, prefix_mask, to_u32, AddressError, MAX_LENGTH,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Contiguous range `[base, base + 2^(32 - prefix_len) - 1]`.
///
/// The base never carries bits beyond the prefix.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    base: Ipv4Addr,
    prefix_len: u8,
}

impl CidrBlock {
    /// Build the block of length `prefix_len` that holds `addr`.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<CidrBlock, AddressError> {
        let base = cut_addr(addr, prefix_len)?;
        Ok(CidrBlock { base, prefix_len })
    }

    /// Block for a prefix length computed in-crate, clamped to /32.
    pub(crate) fn from_prefix(addr: Ipv4Addr, prefix_len: u8) -> CidrBlock {
        let prefix_len = prefix_len.min(MAX_LENGTH);
        CidrBlock {
            base: from_u32(to_u32(addr) & prefix_mask(prefix_len)),
            prefix_len,
        }
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Lowest address in the block.
    pub fn first(&self) -> Ipv4Addr {
        self.base
    }

    /// Highest (broadcast) address in the block.
    pub fn last(&self) -> Ipv4Addr {
        from_u32(to_u32(self.base) | !prefix_mask(self.prefix_len))
    }

    /// Number of addresses covered, 2^32 for `/0`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_len)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let value = to_u32(addr);
        to_u32(self.first()) <= value && value <= to_u32(self.last())
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl FromStr for CidrBlock {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddressError::InvalidCidr {
            input: s.to_string(),
        };
        let (addr, len) = s.split_once('/').ok_or_else(invalid)?;
        let addr = parse_ipv4(addr).map_err(|_| invalid())?;
        if len.is_empty()
            || !len.bytes().all(|b| b.is_ascii_digit())
            || (len.len() > 1 && len.starts_with('0'))
        {
            return Err(invalid());
        }
        let len: u8 = len.parse().map_err(|_| invalid())?;
        CidrBlock::new(addr, len)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clears_host_bits() {
        let block = CidrBlock::new(Ipv4Addr::new(192, 168, 1, 42), 24).unwrap();
        assert_eq!(block.base(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(block.prefix_len(), 24);
        assert_eq!(block.to_string(), "192.168.1.0/24");
        assert!(CidrBlock::new(Ipv4Addr::new(10, 0, 0, 0), 33).is_err());
    }

    #[test]
    fn test_range() {
        let block: CidrBlock = "192.168.0.0/18".parse().unwrap();
        assert_eq!(block.first(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(block.last(), Ipv4Addr::new(192, 168, 63, 255));
        assert_eq!(block.size(), 16384);
        assert!(block.contains(Ipv4Addr::new(192, 168, 50, 1)));
        assert!(!block.contains(Ipv4Addr::new(192, 168, 64, 0)));
        assert!(!block.contains(Ipv4Addr::new(192, 167, 255, 255)));
    }

    #[test]
    fn test_whole_space_and_host_route() {
        let all: CidrBlock = "0.0.0.0/0".parse().unwrap();
        assert_eq!(all.size(), 1u64 << 32);
        assert_eq!(all.last(), Ipv4Addr::BROADCAST);
        assert!(all.contains(Ipv4Addr::new(255, 255, 255, 255)));

        assert_eq!("0.0.0.0/0".parse::<CidrBlock>().unwrap().prefix_len(), 0);

        let host: CidrBlock = "10.1.2.3/32".parse().unwrap();
        assert_eq!(host.size(), 1);
        assert_eq!(host.first(), host.last());
    }

    #[test]
    fn test_from_str_invalid() {
        for input in [
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/+8",
            "10.0.0/8",
            " 10.0.0.0/8",
            "10.0.0.0/8/8",
            "10.0.0.0/08",
            "10.0.0.0/008",
            "10.0.0.0/00",
        ] {
            assert!(input.parse::<CidrBlock>().is_err(), "{input} should fail");
        }
    }

    #[test]
    fn test_serde() {
        let block: CidrBlock = "10.18.126.0/24".parse().unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#""10.18.126.0/24""#);
        let back: CidrBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert!(serde_json::from_str::<CidrBlock>(r#""10.18.126.0""#).is_err());
    }
}
