//! Command line and environment configuration.
//!
//! Every flag has an environment fallback; `main` loads `.env` first so the
//! fallbacks can also come from there.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Smallest CIDR block that contains a set of IPv4 addresses.
///
/// Addresses come from resolving --hostname, or from stdin, one per line.
#[derive(Debug, Parser)]
#[command(name = "cidr-summary", version, about)]
pub struct Cli {
    /// Hostname to resolve and calculate the CIDR for its IPs (repeatable)
    #[arg(short = 'H', long = "hostname", env = "CIDR_SUMMARY_HOSTNAME")]
    pub hostnames: Vec<String>,

    /// Enable debug output
    #[arg(short, long, env = "CIDR_SUMMARY_DEBUG")]
    pub debug: bool,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "CIDR_SUMMARY_FORMAT"
    )]
    pub format: OutputFormat,

    /// log4rs YAML configuration, instead of ./log4rs.yml or the built-in stderr logger
    #[arg(long, env = "CIDR_SUMMARY_LOG_CONFIG")]
    pub log_config: Option<PathBuf>,
}

/// Settings for one run, passed explicitly to whatever needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub hostnames: Vec<String>,
    pub debug: bool,
    pub format: OutputFormat,
    pub log_config: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            // `--hostname ""` means read stdin, as if it was not given
            hostnames: cli
                .hostnames
                .into_iter()
                .filter(|host| !host.is_empty())
                .collect(),
            debug: cli.debug,
            format: cli.format,
            log_config: cli.log_config,
        }
    }
}

impl Config {
    /// Parse the process arguments.
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hostnames_and_flags() {
        let cli = Cli::try_parse_from([
            "cidr-summary",
            "-H",
            "example.com",
            "--hostname",
            "example.org",
            "--debug",
            "--format",
            "json",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.hostnames, vec!["example.com", "example.org"]);
        assert!(config.debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_config, None);
    }

    #[test]
    fn test_empty_hostname_reads_stdin() {
        let cli = Cli::try_parse_from(["cidr-summary", "--hostname", ""]).unwrap();
        assert!(Config::from(cli).hostnames.is_empty());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cidr-summary", "-f", "yaml"]).is_err());
    }
}
