//! wifi-backup - Backup/restore codec for saved wireless network profiles
//!
//! Turns a device's saved network profiles into one portable byte blob and
//! back. Enterprise, Passpoint and ephemeral networks never leave the device.
//! Decoding accepts arbitrary bytes: anything it can't use comes back as
//! `None` rather than an error, since restore data routinely arrives from
//! other devices, older builds or nowhere in particular.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Network profiles, security flags, IP/proxy configuration
//! - `policy`: Which profiles may be backed up
//! - `codec`: Blob header, record and IP configuration codecs, and the
//!   encoder/decoder that drives them
//! - `identity`: Identity keys for matching restored profiles to existing ones
//! - `config`: Codec settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use wifi_backup::models::NetworkProfile;
//!
//! let profiles = vec![
//!     NetworkProfile::psk("\"Home\"", "correct horse"),
//!     NetworkProfile::eap("\"Office\""),
//! ];
//!
//! let blob = wifi_backup::encode(&profiles);
//! let restored = wifi_backup::decode(&blob).unwrap();
//!
//! // The enterprise network stays on the device
//! assert_eq!(restored.len(), 1);
//! assert_eq!(restored[0].config_key(), profiles[0].config_key());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod policy;

#[cfg(test)]
mod test_support;

pub use codec::{decode, encode, BackupCodec, BackupVersion, RestoreReport};
pub use config::CodecSettings;
pub use error::{BackupError, BackupResult};
pub use identity::ConfigKey;
pub use models::{IpConfig, NetworkProfile, SecurityType};
