//! Configuration module for wifi-backup
//!
//! Holds the tunables of the codec: output formatting and the input size
//! limit applied before any parsing happens.

pub mod settings;

pub use settings::CodecSettings;
