//! IP addressing and proxy configuration of a network profile

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the device obtains its address on this network
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IpAssignment {
    /// Address assigned by the network's DHCP server
    #[default]
    Dhcp,
    /// Manually specified settings (any member may be absent)
    Static(StaticIpConfig),
}

/// Manually specified addressing
///
/// Every member is independently optional: a link address without a gateway
/// or DNS servers is a legal configuration and must stay that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaticIpConfig {
    /// Interface address and prefix length
    pub link_address: Option<LinkAddress>,
    /// Default gateway
    pub gateway: Option<IpAddr>,
    /// DNS servers, in order of preference
    pub dns_servers: Vec<IpAddr>,
}

/// An interface address with its prefix length (e.g. `192.168.48.2/8`)
///
/// Serialized as its `addr/prefix` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkAddress {
    address: IpAddr,
    prefix_length: u8,
}

impl LinkAddress {
    /// Create a link address, checking the prefix fits the address family
    pub fn new(address: IpAddr, prefix_length: u8) -> Result<Self, LinkAddressError> {
        let max = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix_length > max {
            return Err(LinkAddressError::PrefixOutOfRange {
                prefix_length,
                max,
            });
        }
        Ok(Self {
            address,
            prefix_length,
        })
    }

    /// The interface address
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// The prefix length in bits
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }
}

impl fmt::Display for LinkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl FromStr for LinkAddress {
    type Err = LinkAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, prefix) = s
            .split_once('/')
            .ok_or_else(|| LinkAddressError::MissingPrefix(s.to_string()))?;

        let address: IpAddr = address
            .parse()
            .map_err(|_| LinkAddressError::InvalidAddress(address.to_string()))?;
        let prefix_length: u8 = prefix
            .parse()
            .map_err(|_| LinkAddressError::InvalidPrefix(prefix.to_string()))?;

        Self::new(address, prefix_length)
    }
}

impl TryFrom<String> for LinkAddress {
    type Error = LinkAddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LinkAddress> for String {
    fn from(link: LinkAddress) -> Self {
        link.to_string()
    }
}

/// Errors building or parsing a [`LinkAddress`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkAddressError {
    #[error("link address '{0}' has no prefix length")]
    MissingPrefix(String),
    #[error("invalid IP address '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("prefix length {prefix_length} exceeds {max}")]
    PrefixOutOfRange { prefix_length: u8, max: u8 },
}

/// Proxy policy of a network
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProxyConfig {
    /// Direct connection
    #[default]
    None,
    /// Fixed proxy host and port
    Static {
        host: String,
        port: u16,
        /// Comma-separated hosts that bypass the proxy (may be empty)
        exclusion_list: String,
    },
    /// Proxy auto-config script
    Pac { url: String },
}

/// Addressing and proxy policy for a profile
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IpConfig {
    pub assignment: IpAssignment,
    pub proxy: ProxyConfig,
}

impl IpConfig {
    /// Create a configuration from its two independent axes
    pub fn new(assignment: IpAssignment, proxy: ProxyConfig) -> Self {
        Self { assignment, proxy }
    }

    /// Static settings, if the assignment is static
    pub fn static_config(&self) -> Option<&StaticIpConfig> {
        match &self.assignment {
            IpAssignment::Static(config) => Some(config),
            IpAssignment::Dhcp => None,
        }
    }

    /// Check whether this is the default (DHCP, no proxy) configuration
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
