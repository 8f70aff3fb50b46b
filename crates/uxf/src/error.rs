//! ---
//! uxf_section: "01-core-functionality"
//! uxf_subsection: "module"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Embedded version and build metadata for the uxf library."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---

/// Result alias used throughout the uxf crate.
pub type Result<T> = std::result::Result<T, UxfError>;

/// Problems found when interpreting the embedded version string.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The artifact contains nothing but whitespace.
    #[error("version artifact is empty")]
    Empty,
    /// The artifact is not a semantic version.
    #[error("invalid version {value:?}: {source}")]
    Invalid {
        /// Trimmed artifact content.
        value: String,
        /// Parser diagnostic.
        #[source]
        source: semver::Error,
    },
}

/// Error type for the uxf crate.
#[derive(Debug, thiserror::Error)]
pub enum UxfError {
    /// Wrapper for version validation failures.
    #[error("version error: {0}")]
    Version(#[from] VersionError),
    /// Wrapper for JSON serialization issues.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_errors_convert() {
        let err: UxfError = VersionError::Empty.into();
        assert_eq!(err.to_string(), "version error: version artifact is empty");
    }
}
