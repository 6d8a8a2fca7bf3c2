//! `ipConfiguration` wire object
//!
//! Only members that are set get written, and decoding never fills in a
//! member the blob doesn't carry: a static configuration with just a link
//! address comes back with just a link address.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::RecordError;
use crate::models::{IpAssignment, IpConfig, LinkAddress, ProxyConfig, StaticIpConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum AssignmentMode {
    #[default]
    Dhcp,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum ProxyMode {
    #[default]
    None,
    Static,
    Pac,
}

/// Wire form of an [`IpConfig`]
///
/// Static members are only meaningful when `assignment` is `STATIC`, and
/// proxy members only for the mode that uses them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpConfigRecord {
    #[serde(default)]
    assignment: AssignmentMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    link_address: Option<LinkAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    gateway: Option<IpAddr>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dns_servers: Vec<IpAddr>,

    #[serde(default)]
    proxy_settings: ProxyMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy_host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy_port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy_exclusion_list: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy_pac_url: Option<String>,
}

impl From<&IpConfig> for IpConfigRecord {
    fn from(config: &IpConfig) -> Self {
        let mut record = Self::default();

        if let IpAssignment::Static(settings) = &config.assignment {
            record.assignment = AssignmentMode::Static;
            record.link_address = settings.link_address;
            record.gateway = settings.gateway;
            record.dns_servers = settings.dns_servers.clone();
        }

        match &config.proxy {
            ProxyConfig::None => {}
            ProxyConfig::Static {
                host,
                port,
                exclusion_list,
            } => {
                record.proxy_settings = ProxyMode::Static;
                record.proxy_host = Some(host.clone());
                record.proxy_port = Some(*port);
                record.proxy_exclusion_list = Some(exclusion_list.clone());
            }
            ProxyConfig::Pac { url } => {
                record.proxy_settings = ProxyMode::Pac;
                record.proxy_pac_url = Some(url.clone());
            }
        }

        record
    }
}

impl TryFrom<IpConfigRecord> for IpConfig {
    type Error = RecordError;

    fn try_from(record: IpConfigRecord) -> Result<Self, Self::Error> {
        let assignment = match record.assignment {
            AssignmentMode::Dhcp => IpAssignment::Dhcp,
            AssignmentMode::Static => IpAssignment::Static(StaticIpConfig {
                link_address: record.link_address,
                gateway: record.gateway,
                dns_servers: record.dns_servers,
            }),
        };

        let proxy = match record.proxy_settings {
            ProxyMode::None => ProxyConfig::None,
            ProxyMode::Static => ProxyConfig::Static {
                host: record
                    .proxy_host
                    .ok_or(RecordError::MissingField("proxyHost"))?,
                port: record
                    .proxy_port
                    .ok_or(RecordError::MissingField("proxyPort"))?,
                exclusion_list: record.proxy_exclusion_list.unwrap_or_default(),
            },
            ProxyMode::Pac => ProxyConfig::Pac {
                url: record
                    .proxy_pac_url
                    .ok_or(RecordError::MissingField("proxyPacUrl"))?,
            },
        };

        Ok(IpConfig::new(assignment, proxy))
    }
}
