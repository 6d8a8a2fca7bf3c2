//! Network record wire object
//!
//! Maps one [`NetworkProfile`] to a JSON object and back. Credentials are
//! written only for the security type they belong to, so a PSK record never
//! carries WEP slots and vice versa.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ip::IpConfigRecord;
use super::RecordError;
use crate::models::{IpConfig, NetworkProfile, SecurityType, WireFlag, WEP_KEY_SLOTS};

/// Wire form of a [`NetworkProfile`]
///
/// Flag sets travel as plain names so a record written by a build that
/// knows more flags still decodes; names this build doesn't know are
/// dropped during conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NetworkRecord {
    ssid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    bssid: Option<String>,

    security: SecurityType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pre_shared_key: Option<String>,

    /// One entry per slot, `null` for an empty slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wep_keys: Option<Vec<Option<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    wep_tx_key_index: Option<u8>,

    #[serde(default)]
    hidden_ssid: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    allowed_key_management: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    allowed_protocols: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    allowed_auth_algorithms: Vec<String>,

    #[serde(default)]
    shared: bool,

    #[serde(default)]
    creator_uid: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ip_configuration: Option<IpConfigRecord>,
}

impl From<&NetworkProfile> for NetworkRecord {
    fn from(profile: &NetworkProfile) -> Self {
        let (pre_shared_key, wep_keys, wep_tx_key_index) = match profile.security_type {
            SecurityType::Psk => (profile.pre_shared_key.clone(), None, None),
            SecurityType::Wep => (
                None,
                profile
                    .wep_keys
                    .iter()
                    .any(Option::is_some)
                    .then(|| profile.wep_keys.to_vec()),
                Some(profile.wep_tx_key_index),
            ),
            SecurityType::Open | SecurityType::Eap => (None, None, None),
        };

        Self {
            ssid: profile.ssid.clone(),
            bssid: profile.bssid.clone(),
            security: profile.security_type,
            pre_shared_key,
            wep_keys,
            wep_tx_key_index,
            hidden_ssid: profile.hidden_ssid,
            allowed_key_management: flag_names(&profile.allowed_key_management),
            allowed_protocols: flag_names(&profile.allowed_protocols),
            allowed_auth_algorithms: flag_names(&profile.allowed_auth_algorithms),
            shared: profile.shared,
            creator_uid: profile.creator_uid,
            ip_configuration: Some(IpConfigRecord::from(&profile.ip_config)),
        }
    }
}

impl TryFrom<NetworkRecord> for NetworkProfile {
    type Error = RecordError;

    fn try_from(record: NetworkRecord) -> Result<Self, Self::Error> {
        let mut profile = NetworkProfile {
            ssid: record.ssid,
            bssid: record.bssid,
            security_type: record.security,
            hidden_ssid: record.hidden_ssid,
            allowed_key_management: flag_set(
                "allowedKeyManagement",
                &record.allowed_key_management,
            ),
            allowed_protocols: flag_set("allowedProtocols", &record.allowed_protocols),
            allowed_auth_algorithms: flag_set(
                "allowedAuthAlgorithms",
                &record.allowed_auth_algorithms,
            ),
            shared: record.shared,
            creator_uid: record.creator_uid,
            ip_config: record
                .ip_configuration
                .map(IpConfig::try_from)
                .transpose()?
                .unwrap_or_default(),
            ..NetworkProfile::default()
        };

        match record.security {
            SecurityType::Psk => profile.pre_shared_key = record.pre_shared_key,
            SecurityType::Wep => {
                profile.wep_keys = wep_slots(record.wep_keys.unwrap_or_default())?;
                profile.wep_tx_key_index = record.wep_tx_key_index.unwrap_or_default();
            }
            SecurityType::Open | SecurityType::Eap => {}
        }

        profile.validate()?;
        Ok(profile)
    }
}

/// Decode one element of the blob's network list
pub(crate) fn decode_record(value: Value) -> Result<NetworkProfile, RecordError> {
    let record: NetworkRecord = serde_json::from_value(value)?;
    NetworkProfile::try_from(record)
}

fn flag_names<T: WireFlag>(flags: &BTreeSet<T>) -> Vec<String> {
    flags.iter().map(|flag| flag.as_str().to_string()).collect()
}

fn flag_set<T: WireFlag>(field: &'static str, names: &[String]) -> BTreeSet<T> {
    names
        .iter()
        .filter_map(|name| {
            let flag = T::parse(name);
            if flag.is_none() {
                tracing::debug!(field, flag = %name, "ignoring unknown flag");
            }
            flag
        })
        .collect()
}

fn wep_slots(keys: Vec<Option<String>>) -> Result<[Option<String>; WEP_KEY_SLOTS], RecordError> {
    if keys.len() > WEP_KEY_SLOTS {
        return Err(RecordError::TooManyWepKeys(keys.len()));
    }

    let mut slots: [Option<String>; WEP_KEY_SLOTS] = Default::default();
    for (slot, key) in slots.iter_mut().zip(keys) {
        *slot = key;
    }
    Ok(slots)
}
