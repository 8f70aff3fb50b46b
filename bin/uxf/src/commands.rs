//! ---
//! uxf_section: "03-command-line"
//! uxf_subsection: "binary"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Command line entrypoint for the uxf tool."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info, warn};
use uxf::{ArtifactStatus, VersionInfo};
use uxf_common::config::OutputFormat;

/// Shared rendering options for reporting commands.
#[derive(Debug, Args)]
pub struct RenderOptions {
    /// Emit JSON regardless of the configured output format.
    #[arg(long)]
    pub json: bool,
}

impl RenderOptions {
    pub fn format(&self, configured: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            configured
        }
    }
}

/// Writes the greeting exactly as produced, terminating the line only if it is open.
pub fn hello(out: &mut impl Write) -> Result<()> {
    let greeting = uxf::hello();
    out.write_all(greeting.as_bytes())?;
    if !greeting.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub fn version(out: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", uxf::version().trim())?,
        OutputFormat::Json => writeln!(out, "{}", VersionInfo::current().to_json()?)?,
    }
    Ok(())
}

pub fn info(out: &mut impl Write, format: OutputFormat) -> Result<()> {
    let info = VersionInfo::current();
    debug!(version = %info.cli_string(), "rendering build metadata");
    match format {
        OutputFormat::Text => writeln!(out, "{}", info.extended())?,
        OutputFormat::Json => writeln!(out, "{}", info.to_json()?)?,
    }
    Ok(())
}

pub fn check(out: &mut impl Write) -> Result<()> {
    let version = uxf::semantic_version().context("embedded version failed validation")?;
    if let ArtifactStatus::Drifted { artifact, package } = uxf::artifact_status() {
        warn!(%artifact, %package, "embedded version differs from the package version");
    }
    info!(%version, "embedded version is valid");
    writeln!(out, "ok: {version}")?;
    Ok(())
}

pub fn long_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", uxf::clap_long_version())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn hello_is_written_verbatim() {
        assert_eq!(render(|out| hello(out)), "Hello uxf v0.1.0\n");
    }

    #[test]
    fn version_text_is_trimmed() {
        assert_eq!(render(|out| version(out, OutputFormat::Text)), "0.1.0\n");
    }

    #[test]
    fn info_json_parses() {
        let text = render(|out| info(out, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["semver"], "0.1.0");
    }

    #[test]
    fn check_reports_valid_version() {
        assert_eq!(render(|out| check(out)), "ok: 0.1.0\n");
    }

    #[test]
    fn json_flag_overrides_configuration() {
        let opts = RenderOptions { json: true };
        assert_eq!(opts.format(OutputFormat::Text), OutputFormat::Json);
        let opts = RenderOptions { json: false };
        assert_eq!(opts.format(OutputFormat::Json), OutputFormat::Json);
        assert_eq!(opts.format(OutputFormat::Text), OutputFormat::Text);
    }
}
