//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Embedded version and build metadata for the uxf library."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Uniform eXchange Format (UXF) library.
//!
//! The crate embeds its release version from the packaged `Version.dat`
//! artifact at compile time and reports it through [`hello`]:
//!
//! ```
//! assert_eq!(uxf::hello(), "Hello uxf v0.1.0\n");
//! ```
//!
//! Build metadata captured by `vergen` is available through
//! [`VersionInfo::current`].

pub mod artifact;
pub mod build_info;
pub mod error;
pub mod version;

pub use artifact::{classify_artifact, ArtifactStatus};
pub use build_info::{clap_long_version, VersionInfo};
pub use error::{Result, UxfError, VersionError};
pub use version::{
    artifact_status, greeting, hello, parse_version, semantic_version, version, GREETING_PREFIX,
    UXF_VERSION,
};
