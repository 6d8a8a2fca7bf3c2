//! Backup encoder/decoder
//!
//! Encoding filters the profiles through the selection policy, writes the
//! envelope and one record per surviving profile. Profiles that fail
//! validation are left out, since no decoder would accept them back.
//!
//! Decoding is a single pass over untrusted bytes. Anything that breaks the
//! blob as a whole (size, JSON framing, envelope, header) discards it
//! entirely; a record that fails on its own is dropped and the rest are
//! still restored.

use serde_json::Value;

use super::header::{BackupVersion, BlobEnvelope};
use super::record::{decode_record, NetworkRecord};
use crate::config::CodecSettings;
use crate::error::{BackupError, BackupResult};
use crate::models::NetworkProfile;
use crate::policy;

/// Converts network profiles to and from backup blobs
///
/// Holds no state besides its settings; one instance can serve any number
/// of threads at once.
#[derive(Debug, Clone, Default)]
pub struct BackupCodec {
    settings: CodecSettings,
}

impl BackupCodec {
    /// Create a codec with the given settings
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Get the codec's settings
    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Serialize every backup-eligible profile into a blob
    pub fn encode(&self, profiles: &[NetworkProfile]) -> Vec<u8> {
        let records: Vec<NetworkRecord> = policy::select_for_backup(profiles)
            .into_iter()
            .filter(|profile| match profile.validate() {
                Ok(()) => true,
                Err(reason) => {
                    tracing::warn!(ssid = %profile.ssid, %reason, "skipping invalid network");
                    false
                }
            })
            .map(NetworkRecord::from)
            .collect();
        let encoded = records.len();

        let envelope = BlobEnvelope::current(records);
        let serialized = if self.settings.pretty_print {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        };

        // Records hold only strings, numbers and string-keyed objects
        let blob = match serialized {
            Ok(blob) => blob,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize network backup");
                return Vec::new();
            }
        };

        tracing::debug!(
            total = profiles.len(),
            encoded,
            bytes = blob.len(),
            "encoded network backup"
        );

        blob
    }

    /// Restore profiles from a blob
    ///
    /// Returns `None` when the blob can't be used at all (foreign, corrupt,
    /// or from an unsupported version). Never panics on arbitrary input.
    pub fn decode(&self, blob: &[u8]) -> Option<Vec<NetworkProfile>> {
        match self.decode_with_report(blob) {
            Ok(report) => Some(report.profiles),
            Err(err) => {
                tracing::warn!(error = %err, bytes = blob.len(), "discarding network backup");
                None
            }
        }
    }

    /// Restore profiles from a blob, reporting what was dropped along the way
    pub fn decode_with_report(&self, blob: &[u8]) -> BackupResult<RestoreReport> {
        if blob.len() > self.settings.max_blob_bytes {
            return Err(BackupError::BlobTooLarge {
                size: blob.len(),
                limit: self.settings.max_blob_bytes,
            });
        }

        let root: Value = serde_json::from_slice(blob)?;
        if !root.is_object() {
            return Err(BackupError::FramingCorruption(
                "top level is not an object".to_string(),
            ));
        }

        let envelope: BlobEnvelope<Value> = serde_json::from_value(root)?;
        let version = envelope.check_header()?;

        let mut report = RestoreReport::new(version);
        for (index, value) in envelope.networks.into_iter().enumerate() {
            let profile = match decode_record(value) {
                Ok(profile) => profile,
                Err(e) => {
                    let err = BackupError::RecordCorruption {
                        index,
                        reason: e.to_string(),
                    };
                    tracing::warn!(error = %err, "dropping network record");
                    report.dropped_records += 1;
                    continue;
                }
            };

            if let Some(reason) = policy::exclusion_reason(&profile) {
                tracing::debug!(index, ssid = %profile.ssid, %reason, "skipping excluded network");
                report.excluded_records += 1;
                continue;
            }

            report.profiles.push(profile);
        }

        tracing::debug!(
            version = %report.version,
            restored = report.profiles.len(),
            dropped = report.dropped_records,
            excluded = report.excluded_records,
            "decoded network backup"
        );

        Ok(report)
    }
}

/// Outcome of decoding a blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    /// Version the blob was written with
    pub version: BackupVersion,
    /// Restored profiles, in blob order
    pub profiles: Vec<NetworkProfile>,
    /// Records dropped because they were malformed
    pub dropped_records: usize,
    /// Records dropped because they are never restored (e.g. enterprise)
    pub excluded_records: usize,
}

impl RestoreReport {
    fn new(version: BackupVersion) -> Self {
        Self {
            version,
            profiles: Vec::new(),
            dropped_records: 0,
            excluded_records: 0,
        }
    }

    /// Check if every record in the blob was restored
    pub fn is_complete(&self) -> bool {
        self.dropped_records == 0 && self.excluded_records == 0
    }

    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Restored {} network(s) from backup v{}",
            self.profiles.len(),
            self.version
        );
        if self.dropped_records > 0 {
            summary.push_str(&format!(
                ", dropped {} corrupt record(s)",
                self.dropped_records
            ));
        }
        if self.excluded_records > 0 {
            summary.push_str(&format!(
                ", skipped {} excluded network(s)",
                self.excluded_records
            ));
        }
        summary
    }
}

/// Serialize profiles with default settings
pub fn encode(profiles: &[NetworkProfile]) -> Vec<u8> {
    BackupCodec::default().encode(profiles)
}

/// Restore profiles with default settings; `None` if the blob is unusable
pub fn decode(blob: &[u8]) -> Option<Vec<NetworkProfile>> {
    BackupCodec::default().decode(blob)
}
