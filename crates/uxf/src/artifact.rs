//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Classification of the packaged version artifact."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
//! Shared by `build.rs` (through `#[path]`) and the library, so it may only
//! depend on `std` and `semver`.

use semver::Version;

/// Outcome of inspecting the packaged version artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Nothing but whitespace; the greeting carries no version.
    Empty,
    /// A semantic version equal to the package version.
    Current(Version),
    /// A semantic version that differs from the package version.
    Drifted {
        /// Version held by the artifact.
        artifact: Version,
        /// Version declared by the package manifest.
        package: String,
    },
    /// Not a semantic version.
    Malformed {
        /// Trimmed artifact content.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl ArtifactStatus {
    /// Only a malformed artifact stops the build.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ArtifactStatus::Malformed { .. })
    }
}

/// Trims `raw` and parses it; `None` when nothing remains.
pub fn parse_artifact(raw: &str) -> Option<(&str, Result<Version, semver::Error>)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some((trimmed, Version::parse(trimmed)))
}

/// Classifies artifact content against the package version.
#[must_use]
pub fn classify_artifact(raw: &str, package: &str) -> ArtifactStatus {
    match parse_artifact(raw) {
        None => ArtifactStatus::Empty,
        Some((value, Err(err))) => ArtifactStatus::Malformed {
            value: value.to_owned(),
            reason: err.to_string(),
        },
        Some((_, Ok(artifact))) if artifact.to_string() == package => {
            ArtifactStatus::Current(artifact)
        }
        Some((_, Ok(artifact))) => ArtifactStatus::Drifted {
            artifact,
            package: package.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_artifact_only_warns() {
        for raw in ["", "\n", "  \t\n"] {
            let status = classify_artifact(raw, "0.1.0");
            assert_eq!(status, ArtifactStatus::Empty);
            assert!(!status.is_fatal());
        }
    }

    #[test]
    fn malformed_artifact_is_fatal() {
        let status = classify_artifact("v0.1\n", "0.1.0");
        assert!(status.is_fatal());
        match status {
            ArtifactStatus::Malformed { value, reason } => {
                assert_eq!(value, "v0.1");
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn drifted_artifact_only_warns() {
        let status = classify_artifact("0.2.0\n", "0.1.0");
        assert_eq!(
            status,
            ArtifactStatus::Drifted {
                artifact: Version::new(0, 2, 0),
                package: "0.1.0".to_owned(),
            }
        );
        assert!(!status.is_fatal());
    }

    #[test]
    fn matching_artifact_is_current() {
        let status = classify_artifact("0.1.0\n", "0.1.0");
        assert_eq!(status, ArtifactStatus::Current(Version::new(0, 1, 0)));
    }

    #[test]
    fn parse_artifact_returns_trimmed_value() {
        let (value, parsed) = parse_artifact(" 1.2.3\n").unwrap();
        assert_eq!(value, "1.2.3");
        assert_eq!(parsed.unwrap(), Version::new(1, 2, 3));
        assert!(parse_artifact("\n").is_none());
    }
}
