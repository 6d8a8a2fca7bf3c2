//! Codec settings for wifi-backup
//!
//! Settings are plain serde data so a host can keep them next to its other
//! configuration and load them with [`CodecSettings::load_or_default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BackupError;

/// Default upper bound on accepted blob size (1 MiB)
pub const DEFAULT_MAX_BLOB_BYTES: usize = 1024 * 1024;

/// Tunables for [`crate::BackupCodec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSettings {
    /// Schema version of the settings file itself
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Emit indented JSON instead of the compact form
    #[serde(default)]
    pub pretty_print: bool,

    /// Blobs larger than this are rejected before parsing
    #[serde(default = "default_max_blob_bytes")]
    pub max_blob_bytes: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_blob_bytes() -> usize {
    DEFAULT_MAX_BLOB_BYTES
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pretty_print: false,
            max_blob_bytes: default_max_blob_bytes(),
        }
    }
}

impl CodecSettings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, BackupError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        let settings: CodecSettings = serde_json::from_str(&contents)
            .map_err(|e| BackupError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.max_blob_bytes == 0 {
            return Err(BackupError::Config(
                "max_blob_bytes must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), BackupError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BackupError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)?;

        Ok(())
    }
}
