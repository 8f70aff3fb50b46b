//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "build"
//! uxf_type: "source"
//! uxf_scope: "build"
//! uxf_description: "Build-time checks for the packaged version artifact."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use std::env;
use std::fs;
use std::path::PathBuf;

use vergen::EmitBuilder;

#[allow(dead_code)]
#[path = "src/artifact.rs"]
mod artifact;

use artifact::{classify_artifact, ArtifactStatus};

const VERSION_FILE: &str = "Version.dat";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={VERSION_FILE}");
    println!("cargo:rerun-if-changed=src/artifact.rs");

    check_version_file()?;

    // Git metadata is optional: outside a checkout vergen emits placeholders.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .emit()?;

    let profile = env::var("PROFILE").unwrap_or_else(|_| "UNKNOWN".to_owned());
    println!("cargo:rustc-env=UXF_BUILD_PROFILE={profile}");
    Ok(())
}

/// A missing or malformed artifact fails the build; an empty or drifted one only warns.
fn check_version_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(VERSION_FILE);
    let raw = fs::read_to_string(&path)
        .map_err(|err| format!("unable to read {}: {err}", path.display()))?;
    let package = env::var("CARGO_PKG_VERSION")?;

    match classify_artifact(&raw, &package) {
        ArtifactStatus::Current(_) => {}
        ArtifactStatus::Empty => {
            println!("cargo:warning={VERSION_FILE} is empty; the greeting will carry no version");
        }
        ArtifactStatus::Drifted { artifact, package } => {
            println!(
                "cargo:warning={VERSION_FILE} ({artifact}) differs from the package version ({package})"
            );
        }
        ArtifactStatus::Malformed { value, reason } => {
            return Err(format!(
                "{VERSION_FILE} holds {value:?}, which is not a semantic version: {reason}"
            )
            .into());
        }
    }
    Ok(())
}
