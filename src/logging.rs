//! log4rs setup.
//!
//! A YAML file wins when there is one; otherwise everything goes to stderr
//! with the level highlighted.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

/// Looked up in the working directory when no file is configured.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{h({l})}: {m}{n}";

/// Initialise the global logger for `config`.
///
/// `--debug` selects the `Debug` level for the built-in logger; a YAML file
/// sets its own levels.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    match log_config_file(config) {
        Some(path) => {
            log4rs::init_file(&path, Default::default()).map_err(|e| {
                format!("Error initializing log4rs from {}: {e}", path.display())
            })?;
            log::debug!("logging configured from {}", path.display());
        }
        None => {
            log4rs::init_config(stderr_config(level(config))?)?;
        }
    }
    Ok(())
}

fn log_config_file(config: &Config) -> Option<PathBuf> {
    config.log_config.clone().or_else(|| {
        let path = PathBuf::from(DEFAULT_LOG_CONFIG);
        path.exists().then_some(path)
    })
}

fn level(config: &Config) -> LevelFilter {
    if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Single stderr appender at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        let mut config = Config::default();
        assert_eq!(level(&config), LevelFilter::Warn);
        config.debug = true;
        assert_eq!(level(&config), LevelFilter::Debug);
    }

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stderr");
    }

    #[test]
    fn test_explicit_log_config_file() {
        let config = Config {
            log_config: Some(PathBuf::from("custom.yml")),
            ..Default::default()
        };
        assert_eq!(log_config_file(&config), Some(PathBuf::from("custom.yml")));
    }
}
