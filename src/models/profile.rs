//! Network profile model
//!
//! One saved wireless network: its identity, credentials, flags and the
//! addressing/proxy policy used when connected to it.

use std::collections::BTreeSet;
use std::fmt;

use super::ip_config::IpConfig;
use super::security::{AuthAlgorithm, KeyMgmt, Protocol, SecurityType};

/// Number of WEP key slots
pub const WEP_KEY_SLOTS: usize = 4;

/// A saved wireless network configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkProfile {
    /// SSID in its stored form (quoted for UTF-8 names, bare for hex)
    pub ssid: String,

    /// Access point the profile is pinned to, if any
    pub bssid: Option<String>,

    /// Authentication/encryption scheme
    pub security_type: SecurityType,

    /// Passphrase (PSK only)
    pub pre_shared_key: Option<String>,

    /// Static WEP keys (WEP only)
    pub wep_keys: [Option<String>; WEP_KEY_SLOTS],

    /// Slot of the WEP key used for transmission (WEP only)
    pub wep_tx_key_index: u8,

    /// Whether the network doesn't broadcast its SSID
    pub hidden_ssid: bool,

    pub allowed_key_management: BTreeSet<KeyMgmt>,
    pub allowed_protocols: BTreeSet<Protocol>,
    pub allowed_auth_algorithms: BTreeSet<AuthAlgorithm>,

    /// Visible to all users of the device
    pub shared: bool,

    /// Uid of the app or user that created the profile
    pub creator_uid: u32,

    /// Passpoint home-provider FQDN. Never backed up.
    pub fqdn: Option<String>,

    /// Passpoint provider display name. Never backed up.
    pub provider_friendly_name: Option<String>,

    /// Temporary network that must not be persisted. Never backed up.
    pub ephemeral: bool,

    /// Addressing and proxy policy
    pub ip_config: IpConfig,
}

impl NetworkProfile {
    /// Create a new profile with the flag sets a fresh network of this
    /// security type gets
    pub fn new(ssid: impl Into<String>, security_type: SecurityType) -> Self {
        let mut allowed_auth_algorithms = BTreeSet::new();
        if security_type == SecurityType::Wep {
            allowed_auth_algorithms.insert(AuthAlgorithm::Open);
            allowed_auth_algorithms.insert(AuthAlgorithm::Shared);
        }

        Self {
            ssid: ssid.into(),
            security_type,
            allowed_key_management: security_type
                .default_key_management()
                .iter()
                .copied()
                .collect(),
            allowed_auth_algorithms,
            shared: true,
            ..Self::default()
        }
    }

    /// Create an open network
    pub fn open(ssid: impl Into<String>) -> Self {
        Self::new(ssid, SecurityType::Open)
    }

    /// Create a PSK network with the given passphrase
    pub fn psk(ssid: impl Into<String>, pre_shared_key: impl Into<String>) -> Self {
        let mut profile = Self::new(ssid, SecurityType::Psk);
        profile.pre_shared_key = Some(pre_shared_key.into());
        profile
    }

    /// Create a WEP network with the given keys and transmit key slot
    pub fn wep(
        ssid: impl Into<String>,
        wep_keys: [Option<String>; WEP_KEY_SLOTS],
        wep_tx_key_index: u8,
    ) -> Self {
        let mut profile = Self::new(ssid, SecurityType::Wep);
        profile.wep_keys = wep_keys;
        profile.wep_tx_key_index = wep_tx_key_index;
        profile
    }

    /// Create an enterprise (EAP) network
    pub fn eap(ssid: impl Into<String>) -> Self {
        Self::new(ssid, SecurityType::Eap)
    }

    /// Attach an IP configuration
    pub fn with_ip_config(mut self, ip_config: IpConfig) -> Self {
        self.ip_config = ip_config;
        self
    }

    /// Returns true if this is a Passpoint (Hotspot 2.0) profile
    pub fn is_passpoint(&self) -> bool {
        self.fqdn.as_deref().is_some_and(|fqdn| !fqdn.is_empty())
    }

    /// Validate the profile
    ///
    /// WEP settings are only checked on WEP profiles; other types never
    /// carry them in a backup.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.ssid.trim().is_empty() {
            return Err(ProfileValidationError::EmptySsid);
        }

        if self.security_type != SecurityType::Wep {
            return Ok(());
        }

        let slot = usize::from(self.wep_tx_key_index);
        if slot >= WEP_KEY_SLOTS {
            return Err(ProfileValidationError::WepKeyIndexOutOfRange(
                self.wep_tx_key_index,
            ));
        }

        if self.wep_keys.iter().any(Option::is_some) && self.wep_keys[slot].is_none() {
            return Err(ProfileValidationError::MissingWepTxKey(self.wep_tx_key_index));
        }

        Ok(())
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ssid, self.security_type)
    }
}

/// Validation errors for network profiles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("SSID is empty")]
    EmptySsid,
    #[error("WEP transmit key index {0} is out of range")]
    WepKeyIndexOutOfRange(u8),
    #[error("WEP transmit key slot {0} is empty")]
    MissingWepTxKey(u8),
}
