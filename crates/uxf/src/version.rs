//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Embedded version and build metadata for the uxf library."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use semver::Version;

use crate::artifact::{classify_artifact, parse_artifact, ArtifactStatus};
use crate::error::VersionError;

/// Content of `Version.dat`, byte for byte. The build fails if the file is missing.
const VERSION: &str = include_str!("../Version.dat");

/// Literal text preceding the version in [`hello`].
pub const GREETING_PREFIX: &str = "Hello uxf v";

/// Version of the UXF file format, i.e. the number following `uxf` in a header line.
pub const UXF_VERSION: u16 = 1;

/// The embedded version string, including any trailing newline from the artifact.
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

/// Greeting for this build, e.g. `"Hello uxf v0.1.0\n"`.
///
/// Never fails: an empty artifact yields the bare prefix.
#[must_use]
pub fn hello() -> String {
    greeting(VERSION)
}

/// Formats the greeting for an arbitrary version string.
#[must_use]
pub fn greeting(version: &str) -> String {
    format!("{GREETING_PREFIX}{version}")
}

/// Parses the embedded version as a semantic version.
pub fn semantic_version() -> Result<Version, VersionError> {
    parse_version(VERSION)
}

/// Parses `raw` as a semantic version, ignoring surrounding whitespace.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let (value, parsed) = parse_artifact(raw).ok_or(VersionError::Empty)?;
    parsed.map_err(|source| VersionError::Invalid {
        value: value.to_owned(),
        source,
    })
}

/// Classifies the embedded version against this crate's package version.
#[must_use]
pub fn artifact_status() -> ArtifactStatus {
    classify_artifact(VERSION, env!("CARGO_PKG_VERSION"))
}
