//! ---
//! uxf_section: "02-configuration-logging"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Shared configuration and logging helpers."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_ENV: &str = "UXF_LOG";

/// Available log formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Pretty,
    StructuredJson,
}

/// Initialize the tracing subscriber based on configuration and environment variables.
///
/// * `forced` (e.g. from a `--verbose` flag) beats every other source.
/// * `UXF_LOG` overrides the filter (e.g. `info`, `debug,uxf=trace`). When unset the
///   standard `RUST_LOG` variable is honoured, finally defaulting to the configured level.
/// * Events go to stderr; stdout is reserved for command output.
pub fn init_tracing(config: &LoggingConfig, forced: Option<&str>) -> Result<()> {
    config.validate()?;
    let filter = match forced {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|err| anyhow!("invalid log directive '{}': {}", directive, err))?,
        None => resolve_filter(std::env::var(LOG_ENV).ok(), config),
    };

    let fmt_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();

    debug!(format = ?config.format, level = %config.level, "tracing initialised");
    Ok(())
}

fn resolve_filter(custom: Option<String>, config: &LoggingConfig) -> EnvFilter {
    // `UXF_LOG` first, then `RUST_LOG`, then the configured level.
    match custom {
        Some(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); using '{}'",
                LOG_ENV, err, config.level
            );
            EnvFilter::new(&config.level)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config, None).is_ok());
        assert!(init_tracing(&config, None).is_ok());
    }

    #[test]
    fn forced_directive_is_validated() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config, Some("debug")).is_ok());
        assert!(init_tracing(&config, Some("uxf=loud")).is_err());
    }

    #[test]
    fn json_format_initialises() {
        let config = LoggingConfig {
            format: LogFormat::StructuredJson,
            level: "info".to_owned(),
        };
        assert!(init_tracing(&config, None).is_ok());
    }

    #[test]
    fn invalid_level_is_rejected() {
        let config = LoggingConfig {
            format: LogFormat::Pretty,
            level: "uxf=loud".to_owned(),
        };
        assert!(init_tracing(&config, None).is_err());
    }

    #[test]
    fn custom_directive_takes_precedence() {
        let filter = resolve_filter(Some("trace".to_owned()), &LoggingConfig::default());
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn bad_custom_directive_falls_back_to_config() {
        let filter = resolve_filter(Some("uxf=loud".to_owned()), &LoggingConfig::default());
        assert_eq!(filter.to_string(), "warn");
    }
}
