//! Security model
//!
//! The closed set of security types a profile can use, plus the flag
//! enumerations that make up a profile's allowed key management, protocol
//! and authentication algorithm sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication/encryption scheme of a network
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityType {
    /// No encryption
    #[default]
    #[serde(rename = "NONE")]
    Open,
    /// Legacy WEP with up to four static keys
    Wep,
    /// WPA/WPA2 personal (pre-shared key)
    Psk,
    /// WPA/WPA2 enterprise (802.1X/EAP)
    Eap,
}

impl SecurityType {
    /// Returns true if credentials for this type are managed outside the
    /// profile (certificates, identity providers) and can't be carried over
    pub fn is_enterprise(&self) -> bool {
        matches!(self, Self::Eap)
    }

    /// Key management label used in identity keys
    pub fn key_mgmt_label(&self) -> &'static str {
        match self {
            Self::Open => KeyMgmt::None.as_str(),
            Self::Wep => "WEP",
            Self::Psk => KeyMgmt::WpaPsk.as_str(),
            Self::Eap => KeyMgmt::WpaEap.as_str(),
        }
    }

    /// Key management flags a freshly created profile of this type allows
    pub fn default_key_management(&self) -> &'static [KeyMgmt] {
        match self {
            Self::Open | Self::Wep => &[KeyMgmt::None],
            Self::Psk => &[KeyMgmt::WpaPsk],
            Self::Eap => &[KeyMgmt::WpaEap, KeyMgmt::Ieee8021x],
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Wep => write!(f, "WEP"),
            Self::Psk => write!(f, "WPA/WPA2 Personal"),
            Self::Eap => write!(f, "WPA/WPA2 Enterprise"),
        }
    }
}

/// A member of one of a profile's flag sets, with a stable wire name
pub trait WireFlag: Copy + Ord + 'static {
    /// Every known flag of this kind
    const ALL: &'static [Self];

    /// Stable name written to the blob
    fn as_str(&self) -> &'static str;

    /// Parse a flag from its wire name; unknown names yield `None`
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.as_str() == s)
    }
}

/// Key management schemes a network allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyMgmt {
    None,
    WpaPsk,
    WpaEap,
    Ieee8021x,
    Wpa2Psk,
    Osen,
    FtPsk,
    FtEap,
}

impl WireFlag for KeyMgmt {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::WpaPsk,
        Self::WpaEap,
        Self::Ieee8021x,
        Self::Wpa2Psk,
        Self::Osen,
        Self::FtPsk,
        Self::FtEap,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::WpaPsk => "WPA_PSK",
            Self::WpaEap => "WPA_EAP",
            Self::Ieee8021x => "IEEE8021X",
            Self::Wpa2Psk => "WPA2_PSK",
            Self::Osen => "OSEN",
            Self::FtPsk => "FT_PSK",
            Self::FtEap => "FT_EAP",
        }
    }
}

/// Security protocols a network allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    /// WPA1
    Wpa,
    /// WPA2 (RSN)
    Rsn,
    /// Hotspot 2.0 OSU
    Osen,
}

impl WireFlag for Protocol {
    const ALL: &'static [Self] = &[Self::Wpa, Self::Rsn, Self::Osen];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Rsn => "RSN",
            Self::Osen => "OSEN",
        }
    }
}

/// 802.11 authentication algorithms a network allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthAlgorithm {
    Open,
    Shared,
    Leap,
}

impl WireFlag for AuthAlgorithm {
    const ALL: &'static [Self] = &[Self::Open, Self::Shared, Self::Leap];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Shared => "SHARED",
            Self::Leap => "LEAP",
        }
    }
}
