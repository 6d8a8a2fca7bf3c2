//! Backup blob codec
//!
//! The blob is a single UTF-8 JSON document:
//!
//! ```text
//! {"format":"wifi-backup","version":"1.0","networks":[{...},{...}]}
//! ```
//!
//! - `header`: the envelope and its `format`/`version` prologue
//! - `record`: one network profile per element of `networks`
//! - `ip`: the `ipConfiguration` object nested in each record
//! - `archive`: [`BackupCodec`], which drives the whole list
//!
//! A JSON syntax error breaks framing and loses the whole blob. The
//! envelope keeps each record as a raw JSON value, so a record that parses
//! as JSON but not as a profile is dropped on its own.

mod archive;
mod header;
mod ip;
mod record;

pub use archive::{decode, encode, BackupCodec, RestoreReport};
pub use header::{BackupVersion, VersionParseError, FORMAT_TAG};

use thiserror::Error;

use crate::models::ProfileValidationError;

/// Why a single record could not be turned into a profile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record doesn't have the shape of a network record
    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("too many WEP keys: {0}")]
    TooManyWepKeys(usize),

    #[error("decoded profile is invalid: {0}")]
    Invalid(#[from] ProfileValidationError),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
