//! Release version string validation.
//!
//! Accepted versions are `MAJOR.MINOR.PATCH` with an optional `-RC<n>`
//! release-candidate suffix. Each component is one or more ASCII digits, and
//! leading zeros are allowed. Build metadata and other pre-release
//! identifiers are rejected.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

static RELEASE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+(-RC[0-9]+)?$").expect("release version pattern is valid")
});

/// Errors from version validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The version string does not match the release version grammar.
    #[error("'{0}' does not comply to semantic versioning")]
    NonCompliant(String),
}

/// Result alias for version operations.
pub type VersionResult<T> = Result<T, VersionError>;

/// Returns `true` if the whole string is a valid release version.
pub fn is_valid(version: &str) -> bool {
    RELEASE_VERSION.is_match(version)
}

/// Validate a release version string.
#[instrument]
pub fn validate(version: &str) -> VersionResult<()> {
    if is_valid(version) {
        debug!("version is compliant");
        Ok(())
    } else {
        debug!("version is not compliant");
        Err(VersionError::NonCompliant(version.to_string()))
    }
}

/// Outcome of checking a single version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// The version string as given.
    pub version: String,
    /// Whether the string matches the release version grammar.
    pub valid: bool,
    /// Whether the string is a valid release candidate (`-RC<n>`).
    pub release_candidate: bool,
}

impl VersionCheck {
    /// Check `version` and record the result.
    pub fn new(version: &str) -> Self {
        let captures = RELEASE_VERSION.captures(version);
        Self {
            version: version.to_string(),
            valid: captures.is_some(),
            release_candidate: captures.is_some_and(|c| c.get(1).is_some()),
        }
    }
}
