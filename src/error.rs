//! Error types for wifi-backup
//!
//! Decoding never surfaces these to callers of [`crate::decode`]; they exist
//! so the orchestrator can log precisely why a blob or record was rejected,
//! and so [`crate::BackupCodec::decode_with_report`] can report it.

use thiserror::Error;

/// The main error type for wifi-backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Header present but carries a major version this decoder cannot read
    #[error("Unsupported backup version {found} (supported major version: {supported})")]
    UnsupportedVersion { found: String, supported: u32 },

    /// Header missing, or its fields are not in the expected form
    #[error("Malformed backup header: {0}")]
    MalformedHeader(String),

    /// The blob's structural delimiters are broken; nothing can be recovered
    #[error("Backup framing is corrupt: {0}")]
    FramingCorruption(String),

    /// One record is malformed or incomplete
    #[error("Network record {index} is corrupt: {reason}")]
    RecordCorruption { index: usize, reason: String },

    /// Input exceeds the configured size limit
    #[error("Backup blob is {size} bytes, limit is {limit}")]
    BlobTooLarge { size: usize, limit: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Well-formed JSON that doesn't have the shape of a backup
    #[error("JSON error: {0}")]
    Json(String),
}

impl BackupError {
    /// Check if the whole blob was rejected (as opposed to a single record)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::RecordCorruption { .. })
    }

    /// Check if this is a version mismatch
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }
}

impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackupError {
    /// Syntax errors and truncation break framing; anything else means the
    /// JSON itself was readable
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            Self::FramingCorruption(err.to_string())
        } else {
            Self::Json(err.to_string())
        }
    }
}

/// Result type alias for wifi-backup operations
pub type BackupResult<T> = Result<T, BackupError>;
