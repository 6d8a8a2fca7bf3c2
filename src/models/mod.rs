//! Core data models for wifi-backup
//!
//! These are the in-memory shapes the codec reads on backup and produces on
//! restore: network profiles, their security flags and their IP/proxy
//! configuration.

pub mod ip_config;
pub mod profile;
pub mod security;

pub use ip_config::{
    IpAssignment, IpConfig, LinkAddress, LinkAddressError, ProxyConfig, StaticIpConfig,
};
pub use profile::{NetworkProfile, ProfileValidationError, WEP_KEY_SLOTS};
pub use security::{AuthAlgorithm, KeyMgmt, Protocol, SecurityType, WireFlag};
