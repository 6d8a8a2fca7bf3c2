//! Shared fixtures and proptest strategies for unit tests

use std::collections::BTreeSet;
use std::fmt;
use std::net::IpAddr;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::identity::index_by_key;
use crate::models::{
    AuthAlgorithm, IpAssignment, IpConfig, KeyMgmt, LinkAddress, NetworkProfile, Protocol,
    ProxyConfig, SecurityType, StaticIpConfig, WireFlag,
};

pub(crate) const TEST_UID: u32 = 1;
pub(crate) const TEST_SSID: &str = "WifiBackupRestoreSSID_";
pub(crate) const TEST_PSK: &str = "WifiBackupRestorePsk";
pub(crate) const TEST_WEP_KEYS: [&str; 4] = [
    "WifiBackupRestoreWep1",
    "WifiBackupRestoreWep2",
    "WifiBackupRestoreWep3",
    "WifiBackupRestoreWep3",
];
pub(crate) const TEST_WEP_TX_KEY_INDEX: u8 = 1;
pub(crate) const TEST_FQDN: &str = "WifiBackupRestoreFQDN";
pub(crate) const TEST_PROVIDER_FRIENDLY_NAME: &str = "WifiBackupRestoreFriendlyName";
pub(crate) const TEST_STATIC_IP_LINK_ADDRESS: &str = "192.168.48.2";
pub(crate) const TEST_STATIC_IP_LINK_PREFIX_LENGTH: u8 = 8;
pub(crate) const TEST_STATIC_IP_GATEWAY_ADDRESS: &str = "192.168.48.1";
pub(crate) const TEST_STATIC_IP_DNS_SERVER_ADDRESSES: [&str; 2] = ["192.168.48.1", "192.168.48.10"];
pub(crate) const TEST_STATIC_PROXY_HOST: &str = "192.168.48.1";
pub(crate) const TEST_STATIC_PROXY_PORT: u16 = 8000;
pub(crate) const TEST_STATIC_PROXY_EXCLUSION_LIST: &str = "";
pub(crate) const TEST_PAC_PROXY_LOCATION: &str = "http://";

fn ssid(id: usize) -> String {
    format!("\"{}{}\"", TEST_SSID, id)
}

fn with_uid(mut profile: NetworkProfile) -> NetworkProfile {
    profile.creator_uid = TEST_UID;
    profile
}

pub(crate) fn open_network(id: usize) -> NetworkProfile {
    with_uid(NetworkProfile::open(ssid(id)))
}

pub(crate) fn psk_network(id: usize) -> NetworkProfile {
    with_uid(NetworkProfile::psk(ssid(id), TEST_PSK))
}

pub(crate) fn wep_network(id: usize) -> NetworkProfile {
    with_uid(NetworkProfile::wep(
        ssid(id),
        TEST_WEP_KEYS.map(|key| Some(key.to_string())),
        TEST_WEP_TX_KEY_INDEX,
    ))
}

pub(crate) fn eap_network(id: usize) -> NetworkProfile {
    let mut profile = with_uid(NetworkProfile::eap(ssid(id)));
    profile.fqdn = Some(TEST_FQDN.to_string());
    profile.provider_friendly_name = Some(TEST_PROVIDER_FRIENDLY_NAME.to_string());
    profile
}

fn address(raw: &str) -> IpAddr {
    raw.parse().unwrap()
}

fn link_address() -> LinkAddress {
    LinkAddress::new(
        address(TEST_STATIC_IP_LINK_ADDRESS),
        TEST_STATIC_IP_LINK_PREFIX_LENGTH,
    )
    .unwrap()
}

pub(crate) fn static_ip_config() -> StaticIpConfig {
    StaticIpConfig {
        link_address: Some(link_address()),
        gateway: Some(address(TEST_STATIC_IP_GATEWAY_ADDRESS)),
        dns_servers: TEST_STATIC_IP_DNS_SERVER_ADDRESSES
            .iter()
            .map(|raw| address(raw))
            .collect(),
    }
}

/// Only the link address; no gateway or DNS servers
pub(crate) fn partial_static_ip_config() -> StaticIpConfig {
    StaticIpConfig {
        link_address: Some(link_address()),
        ..StaticIpConfig::default()
    }
}

pub(crate) fn static_proxy() -> ProxyConfig {
    ProxyConfig::Static {
        host: TEST_STATIC_PROXY_HOST.to_string(),
        port: TEST_STATIC_PROXY_PORT,
        exclusion_list: TEST_STATIC_PROXY_EXCLUSION_LIST.to_string(),
    }
}

pub(crate) fn pac_proxy() -> ProxyConfig {
    ProxyConfig::Pac {
        url: TEST_PAC_PROXY_LOCATION.to_string(),
    }
}

pub(crate) fn static_ip_config_with_pac_proxy() -> IpConfig {
    IpConfig::new(IpAssignment::Static(static_ip_config()), pac_proxy())
}

pub(crate) fn static_ip_config_with_static_proxy() -> IpConfig {
    IpConfig::new(IpAssignment::Static(static_ip_config()), static_proxy())
}

pub(crate) fn partial_static_ip_config_with_pac_proxy() -> IpConfig {
    IpConfig::new(IpAssignment::Static(partial_static_ip_config()), pac_proxy())
}

pub(crate) fn dhcp_ip_config_with_pac_proxy() -> IpConfig {
    IpConfig::new(IpAssignment::Dhcp, pac_proxy())
}

/// Match profiles by identity key and compare them field by field
pub(crate) fn assert_profiles_match(expected: &[NetworkProfile], actual: &[NetworkProfile]) {
    assert_eq!(expected.len(), actual.len());
    let actual_by_key = index_by_key(actual);
    for expected_profile in expected {
        let key = expected_profile.config_key();
        let actual_profile = actual_by_key
            .get(&key)
            .unwrap_or_else(|| panic!("no restored profile for {}", key));
        assert_eq!(expected_profile, *actual_profile);
    }
}

fn arb_ssid() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{0,24}".prop_map(|name| format!("\"{}\"", name))
}

fn arb_flags<T: WireFlag + fmt::Debug>() -> impl Strategy<Value = BTreeSet<T>> {
    prop::sample::subsequence(T::ALL.to_vec(), 0..=T::ALL.len())
        .prop_map(|flags| flags.into_iter().collect())
}

fn arb_ip_address() -> impl Strategy<Value = IpAddr> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(IpAddr::from),
        any::<[u16; 8]>().prop_map(IpAddr::from),
    ]
}

fn arb_link_address() -> impl Strategy<Value = LinkAddress> {
    prop_oneof![
        (any::<[u8; 4]>(), 0u8..=32)
            .prop_map(|(octets, prefix)| LinkAddress::new(IpAddr::from(octets), prefix).unwrap()),
        (any::<[u16; 8]>(), 0u8..=128).prop_map(|(segments, prefix)| {
            LinkAddress::new(IpAddr::from(segments), prefix).unwrap()
        }),
    ]
}

fn arb_ip_config() -> impl Strategy<Value = IpConfig> {
    let assignment = prop_oneof![
        Just(IpAssignment::Dhcp),
        (
            prop::option::of(arb_link_address()),
            prop::option::of(arb_ip_address()),
            prop::collection::vec(arb_ip_address(), 0..3),
        )
            .prop_map(|(link_address, gateway, dns_servers)| {
                IpAssignment::Static(StaticIpConfig {
                    link_address,
                    gateway,
                    dns_servers,
                })
            }),
    ];
    let proxy = prop_oneof![
        Just(ProxyConfig::None),
        ("[a-z0-9.-]{1,24}", any::<u16>(), "[a-z0-9.,]{0,24}").prop_map(
            |(host, port, exclusion_list)| ProxyConfig::Static {
                host,
                port,
                exclusion_list,
            }
        ),
        "https?://[a-z0-9./]{0,24}".prop_map(|url| ProxyConfig::Pac { url }),
    ];

    (assignment, proxy).prop_map(|(assignment, proxy)| IpConfig::new(assignment, proxy))
}

/// Valid profile of the given security type, with credentials only for
/// that type
fn arb_profile_with(
    security: impl Strategy<Value = SecurityType>,
) -> impl Strategy<Value = NetworkProfile> {
    (
        (
            arb_ssid(),
            prop::option::of("[0-9a-f]{2}(:[0-9a-f]{2}){5}"),
            security,
            any::<bool>(),
            any::<bool>(),
            any::<u32>(),
        ),
        (
            "[ -~]{8,63}",
            prop::array::uniform4(prop::option::of("[A-Za-z0-9]{5,13}")),
            0u8..4,
        ),
        (
            arb_flags::<KeyMgmt>(),
            arb_flags::<Protocol>(),
            arb_flags::<AuthAlgorithm>(),
        ),
        arb_ip_config(),
    )
        .prop_map(
            |(
                (ssid, bssid, security_type, hidden_ssid, shared, creator_uid),
                (psk, mut wep_keys, wep_tx_key_index),
                (allowed_key_management, allowed_protocols, allowed_auth_algorithms),
                ip_config,
            )| {
                let mut profile = NetworkProfile {
                    ssid,
                    bssid,
                    security_type,
                    hidden_ssid,
                    allowed_key_management,
                    allowed_protocols,
                    allowed_auth_algorithms,
                    shared,
                    creator_uid,
                    ip_config,
                    ..NetworkProfile::default()
                };

                match security_type {
                    SecurityType::Psk => profile.pre_shared_key = Some(psk),
                    SecurityType::Wep => {
                        let slot = usize::from(wep_tx_key_index);
                        if wep_keys.iter().any(Option::is_some) && wep_keys[slot].is_none() {
                            wep_keys[slot] = Some(psk);
                        }
                        profile.wep_keys = wep_keys;
                        profile.wep_tx_key_index = wep_tx_key_index;
                    }
                    SecurityType::Open | SecurityType::Eap => {}
                }

                profile
            },
        )
}

/// Any Open, PSK or WEP profile
pub(crate) fn arb_backup_profile() -> impl Strategy<Value = NetworkProfile> {
    arb_profile_with(prop_oneof![
        Just(SecurityType::Open),
        Just(SecurityType::Psk),
        Just(SecurityType::Wep),
    ])
}

/// Any profile, including ones that never get backed up
pub(crate) fn arb_profile() -> impl Strategy<Value = NetworkProfile> {
    (
        arb_profile_with(prop_oneof![
            Just(SecurityType::Open),
            Just(SecurityType::Psk),
            Just(SecurityType::Wep),
            Just(SecurityType::Eap),
        ]),
        prop::option::of(Just(TEST_FQDN.to_string())),
        any::<bool>(),
    )
        .prop_map(|(mut profile, fqdn, ephemeral)| {
            profile.fqdn = fqdn;
            profile.ephemeral = ephemeral;
            profile
        })
}

/// Backup-eligible profiles with pairwise distinct identity keys
pub(crate) fn arb_backup_list() -> impl Strategy<Value = Vec<NetworkProfile>> {
    prop::collection::vec(arb_backup_profile(), 0..8).prop_map(|mut profiles| {
        for (index, profile) in profiles.iter_mut().enumerate() {
            profile.ssid = format!("\"net{}{}", index, &profile.ssid[1..]);
        }
        profiles
    })
}
