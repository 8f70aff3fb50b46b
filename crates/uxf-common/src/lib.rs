//! ---
//! uxf_section: "02-configuration-logging"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Shared configuration and logging helpers."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
//! Configuration loading and tracing setup consumed by the uxf binaries.

pub mod config;
pub mod logging;

pub use config::{LoadedUxfConfig, LoggingConfig, OutputConfig, OutputFormat, UxfConfig};
pub use logging::{init_tracing, LogFormat};
