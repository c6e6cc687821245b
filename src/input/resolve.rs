//! Hostname resolution through the system resolver.

use colored::Colorize;
use futures::future::try_join_all;
use std::io;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("error resolving hostname {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// Resolve `host` to its IPv4 addresses.
///
/// Resolver order is kept and repeated addresses are dropped. IPv6 results
/// are discarded.
pub async fn resolve_hostname(host: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
    log::debug!("resolve_hostname({host})", host = host.on_blue());
    let addrs = tokio::net::lookup_host((host, 0u16))
        .await
        .map_err(|source| {
            log::debug!("{failed} to resolve {host}: {source}", failed = "failed".on_red());
            ResolveError::Lookup {
                host: host.to_string(),
                source,
            }
        })?;

    let ips = ipv4_only(addrs.map(|addr| addr.ip()));
    log::debug!("Resolved IPs for {host}: {ips:?}");
    Ok(ips)
}

/// Resolve several hosts concurrently; results are concatenated in `hosts` order.
pub async fn resolve_hostnames<S: AsRef<str>>(
    hosts: &[S],
) -> Result<Vec<Ipv4Addr>, ResolveError> {
    let resolved = try_join_all(hosts.iter().map(|host| resolve_hostname(host.as_ref()))).await?;
    Ok(resolved.into_iter().flatten().collect())
}

fn ipv4_only<I: IntoIterator<Item = IpAddr>>(addrs: I) -> Vec<Ipv4Addr> {
    let mut ips: Vec<Ipv4Addr> = Vec::new();
    for addr in addrs {
        match addr {
            IpAddr::V4(ip) => {
                if !ips.contains(&ip) {
                    ips.push(ip);
                }
            }
            IpAddr::V6(ip) => log::debug!("skipping IPv6 address {ip}"),
        }
    }
    ips
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_ipv4_only() {
        let addrs = vec![
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
        ];
        assert_eq!(
            ipv4_only(addrs),
            vec![Ipv4Addr::new(10, 0, 0, 2), Ipv4Addr::new(10, 0, 0, 1)]
        );
    }

    #[tokio::test]
    async fn test_resolve_ip_literal() {
        let ips = resolve_hostname("127.0.0.1").await.unwrap();
        assert_eq!(ips, vec![Ipv4Addr::LOCALHOST]);
    }

    #[tokio::test]
    async fn test_resolve_ipv6_literal_is_empty() {
        let ips = resolve_hostname("::1").await.unwrap();
        assert!(ips.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_hostnames_keeps_order() {
        let ips = resolve_hostnames(&["10.0.0.9", "10.0.0.1"]).await.unwrap();
        assert_eq!(
            ips,
            vec![Ipv4Addr::new(10, 0, 0, 9), Ipv4Addr::new(10, 0, 0, 1)]
        );
    }

    #[tokio::test]
    async fn test_resolve_localhost() {
        let ips = resolve_hostname("localhost").await.unwrap();
        assert!(!ips.is_empty());
        assert!(ips.contains(&Ipv4Addr::LOCALHOST));
        assert!(ips.iter().all(|ip| ip.is_loopback()));
    }

    #[tokio::test]
    async fn test_resolve_invalid_host() {
        let err = resolve_hostname("no such host.invalid").await.unwrap_err();
        assert!(err.to_string().contains("no such host.invalid"));
    }
}
