//! ---
//! uxf_section: "02-configuration-logging"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Shared configuration and logging helpers."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::logging::LogFormat;

fn default_log_level() -> String {
    "warn".to_owned()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Configuration for the uxf command line tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UxfConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// An [`UxfConfig`] together with the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedUxfConfig {
    pub config: UxfConfig,
    pub source: Option<PathBuf>,
}

impl UxfConfig {
    pub const ENV_CONFIG_PATH: &'static str = "UXF_CONFIG";
    pub const DEFAULT_FILE_NAME: &'static str = "uxf.toml";

    /// Load configuration together with the effective source path.
    ///
    /// Falls back to defaults when neither the override nor any candidate exists.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedUxfConfig> {
        Self::resolve(std::env::var(Self::ENV_CONFIG_PATH).ok(), candidates)
    }

    pub(crate) fn resolve<P: AsRef<Path>>(
        env_path: Option<String>,
        candidates: &[P],
    ) -> Result<LoadedUxfConfig> {
        if let Some(env_path) = env_path.filter(|p| !p.trim().is_empty()) {
            let path = PathBuf::from(env_path);
            let config = Self::from_path(&path)?;
            return Ok(LoadedUxfConfig {
                config,
                source: Some(path),
            });
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedUxfConfig {
                    config,
                    source: Some(path.to_path_buf()),
                });
            }
        }

        debug!("no configuration file found; using defaults");
        Ok(LoadedUxfConfig {
            config: Self::default(),
            source: None,
        })
    }

    /// Read and validate a single configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<UxfConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl std::str::FromStr for UxfConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: UxfConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `info` or `warn,uxf=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|err| anyhow!("invalid logging level '{}': {}", self.level, err))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering used by commands that can emit either text or JSON.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}
