//! Identity keys for matching profiles
//!
//! Two profiles with the same [`ConfigKey`] describe the same logical
//! network, whatever their other fields say. Callers use this to pair
//! restored profiles with the ones already on the device; the codec itself
//! never looks at it.

use std::collections::HashMap;
use std::fmt;

use crate::models::{NetworkProfile, SecurityType};

/// Stable identity of a network profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Compute the key for a profile
    ///
    /// Passpoint profiles are keyed by their FQDN, everything else by SSID
    /// plus the key management label of the security type.
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        if profile.is_passpoint() {
            let fqdn = profile.fqdn.as_deref().unwrap_or_default();
            return Self(format!(
                "{}{}",
                fqdn,
                SecurityType::Eap.key_mgmt_label()
            ));
        }
        Self(format!(
            "{}{}",
            profile.ssid,
            profile.security_type.key_mgmt_label()
        ))
    }

    /// The key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl NetworkProfile {
    /// Identity key of this profile
    pub fn config_key(&self) -> ConfigKey {
        ConfigKey::for_profile(self)
    }
}

/// Index profiles by identity key
///
/// When several profiles share a key the last one wins, matching how a
/// configuration store would overwrite an entry on insert.
pub fn index_by_key(profiles: &[NetworkProfile]) -> HashMap<ConfigKey, &NetworkProfile> {
    profiles
        .iter()
        .map(|profile| (profile.config_key(), profile))
        .collect()
}
