//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Embedded version and build metadata for the uxf library."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use serde::Serialize;

use crate::version::{version, UXF_VERSION};

const UNKNOWN: &str = "UNKNOWN";

/// Placeholder vergen writes when a source (usually git) is unavailable.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Compile-time version metadata captured via `vergen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Embedded release version, without surrounding whitespace.
    pub semver: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Cargo profile used during compilation.
    pub profile: String,
    /// UXF file format version.
    pub uxf_format: u16,
}

impl VersionInfo {
    /// Construct a new [`VersionInfo`] instance using environment metadata.
    #[must_use]
    pub fn current() -> Self {
        Self {
            semver: version().trim().to_owned(),
            git_sha: metadata(option_env!("VERGEN_GIT_SHA")),
            build_timestamp: metadata(option_env!("VERGEN_BUILD_TIMESTAMP")),
            target: metadata(option_env!("VERGEN_CARGO_TARGET_TRIPLE")),
            profile: metadata(option_env!("UXF_BUILD_PROFILE")),
            uxf_format: UXF_VERSION,
        }
    }

    /// Returns a concise CLI string combining semantic version and git hash.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.semver, self.git_sha)
    }

    /// Human readable banner.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("uxf v{} (git {})", self.semver, self.git_sha)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}\nFormat: uxf {format}",
            banner = self.banner(),
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile,
            format = self.uxf_format
        )
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Helper for Clap commands to print the extended version string.
#[must_use]
pub fn clap_long_version() -> String {
    VersionInfo::current().extended()
}

fn metadata(value: Option<&'static str>) -> String {
    match value {
        Some(value) if !value.is_empty() && value != VERGEN_PLACEHOLDER => value.to_owned(),
        _ => UNKNOWN.to_owned(),
    }
}
