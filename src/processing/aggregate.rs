//! Smallest single CIDR block covering a set of addresses.
//!
//! A block is a contiguous integer range, so covering the lowest and the
//! highest address covers everything in between. The longest common prefix
//! of those two extremes gives the tightest such block.

use crate::models::{compare, prefix_mask, to_u32, CidrBlock, MAX_LENGTH};
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("no addresses to aggregate")]
    EmptyInput,
}

/// Result of one aggregation, with the input extremes it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cidr: CidrBlock,
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
    pub prefix_length: u8,
    pub size: u64,
    /// Number of input addresses, duplicates included.
    pub count: usize,
    pub min: Ipv4Addr,
    pub max: Ipv4Addr,
}

/// Find the smallest CIDR block containing every address.
///
/// # Examples
/// ```
/// use cidr_summary::processing::aggregate;
/// use std::net::Ipv4Addr;
/// let block = aggregate([Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 2)]).unwrap();
/// assert_eq!(block.to_string(), "192.168.1.0/30");
/// ```
pub fn aggregate<I>(addresses: I) -> Result<CidrBlock, AggregateError>
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    summarize(addresses).map(|summary| summary.cidr)
}

/// Like [`aggregate`], also reporting count and extremes.
pub fn summarize<I>(addresses: I) -> Result<Summary, AggregateError>
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let mut count = 0usize;
    let (min, max) = match addresses
        .into_iter()
        .inspect(|_| count += 1)
        .minmax_by(compare)
    {
        MinMaxResult::NoElements => return Err(AggregateError::EmptyInput),
        MinMaxResult::OneElement(addr) => (addr, addr),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let prefix_len = common_prefix_len(to_u32(min), to_u32(max));
    log::debug!("min={min} max={max} -> prefix /{prefix_len}");

    let cidr = CidrBlock::from_prefix(min, prefix_len);
    Ok(Summary {
        cidr,
        first: cidr.first(),
        last: cidr.last(),
        prefix_length: prefix_len,
        size: cidr.size(),
        count,
        min,
        max,
    })
}

/// Longest prefix length at which `min` and `max` agree.
///
/// Tries /32 first and shortens until the masked values match; /0 always does.
pub fn common_prefix_len(min: u32, max: u32) -> u8 {
    let mut prefix_len = MAX_LENGTH;
    while prefix_len > 0 {
        let mask = prefix_mask(prefix_len);
        if min & mask == max & mask {
            break;
        }
        prefix_len -= 1;
    }
    prefix_len
}
