//! Smallest CIDR block covering a set of IPv4 addresses.
//!
//! This crate is organized into the following modules:
//! - [`models`] - Address codec and [`models::CidrBlock`]
//! - [`processing`] - Aggregation of an address set into one block
//! - [`input`] - Line reader and hostname resolution
//! - [`output`] - Text and JSON rendering
//! - [`config`] - Command line and environment settings
//! - [`logging`] - log4rs setup

pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use input::{read_addresses, resolve_hostnames};
use processing::{summarize, AggregateError};
use std::error::Error;
use std::io::BufRead;
use std::net::Ipv4Addr;

/// Gather the addresses for `config`: resolved hostnames, or `input` lines.
pub async fn get_addresses<R: BufRead>(
    config: &Config,
    input: R,
) -> Result<Vec<Ipv4Addr>, Box<dyn Error>> {
    if !config.hostnames.is_empty() {
        return Ok(resolve_hostnames(&config.hostnames).await?);
    }
    log::debug!("Enter IPs, one per line. Press Ctrl+D (Unix) or Ctrl+Z (Windows) to end:");
    let ips = read_addresses(input, config.debug)?;
    Ok(ips)
}

/// Compute and render the covering block for `config`.
///
/// # Returns
/// * `Ok(String)` - the rendered result, without trailing newline
/// * `Err` - resolution or read failure, or [`AggregateError::EmptyInput`]
pub async fn run<R: BufRead>(config: &Config, input: R) -> Result<String, Box<dyn Error>> {
    log::info!("#Start run()");
    let ips = get_addresses(config, input).await?;
    let summary = summarize(ips)?;
    log::info!("# {} addresses -> {}", summary.count, summary.cidr);
    Ok(output::render(&summary, config.format)?)
}

/// Message shown to the user for an error returned by [`run`].
pub fn describe_error(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<AggregateError>() {
        Some(AggregateError::EmptyInput) => "No valid IPs provided.".to_string(),
        None => err.to_string(),
    }
}
