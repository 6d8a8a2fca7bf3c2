//! Blob prologue: format tag and schema version
//!
//! Versions are `major.minor`. A decoder reads any minor version of its own
//! major version (newer minors only add fields, which record decoding
//! ignores) and refuses every other major version.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BackupError, BackupResult};

/// Identifies a blob as ours before its version is even looked at
pub const FORMAT_TAG: &str = "wifi-backup";

/// Schema version of a backup blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BackupVersion {
    pub major: u32,
    pub minor: u32,
}

impl BackupVersion {
    /// Version written by this build
    pub const CURRENT: Self = Self { major: 1, minor: 0 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Returns true if this build can decode blobs of this version
    pub fn is_readable(&self) -> bool {
        self.major == Self::CURRENT.major
    }
}

impl fmt::Display for BackupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for BackupVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| VersionParseError(s.to_string()))?;
        let major = major.parse().map_err(|_| VersionParseError(s.to_string()))?;
        let minor = minor.parse().map_err(|_| VersionParseError(s.to_string()))?;
        Ok(Self { major, minor })
    }
}

/// A version string that isn't `major.minor`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid backup version '{0}'")]
pub struct VersionParseError(String);

/// Top-level object of a blob
///
/// Decoding reads the records as raw [`serde_json::Value`]s so each one can
/// fail without taking the rest of the list with it. A missing `format` or
/// `version` reads as empty and is reported by [`BlobEnvelope::check_header`].
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BlobEnvelope<R> {
    #[serde(default)]
    pub(crate) format: String,
    #[serde(default)]
    pub(crate) version: String,
    pub(crate) networks: Vec<R>,
}

impl<R> BlobEnvelope<R> {
    /// Envelope written by this build
    pub(crate) fn current(networks: Vec<R>) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            version: BackupVersion::CURRENT.to_string(),
            networks,
        }
    }

    /// Check the prologue and return the blob's version
    pub(crate) fn check_header(&self) -> BackupResult<BackupVersion> {
        match self.format.as_str() {
            FORMAT_TAG => {}
            "" => return Err(BackupError::MalformedHeader("missing format tag".to_string())),
            other => {
                return Err(BackupError::MalformedHeader(format!(
                    "unknown format '{}'",
                    other
                )))
            }
        }

        if self.version.is_empty() {
            return Err(BackupError::MalformedHeader("missing version".to_string()));
        }

        let version: BackupVersion = self
            .version
            .parse()
            .map_err(|e: VersionParseError| BackupError::MalformedHeader(e.to_string()))?;

        if !version.is_readable() {
            return Err(BackupError::UnsupportedVersion {
                found: version.to_string(),
                supported: BackupVersion::CURRENT.major,
            });
        }

        Ok(version)
    }
}
