//! Typed network primitives shared by every endpoint representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Errors raised while parsing textual network values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid IP network format: {0}")]
    InvalidIpNetwork(String),

    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),
}

// --- IP version ---

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Numeric form (4 or 6).
    pub const fn as_u8(&self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

/// Anything that belongs to exactly one address family.
pub trait Versioned {
    fn ip_version(&self) -> IpVersion;
}

// --- IP address ---

/// An IPv4 or IPv6 address, serialized as its canonical text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IpAddress {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl IpAddress {
    pub const fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    pub const fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }
}

impl Versioned for IpAddress {
    fn ip_version(&self) -> IpVersion {
        match self {
            IpAddress::V4(_) => IpVersion::V4,
            IpAddress::V6(_) => IpVersion::V6,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => addr.fmt(f),
            IpAddress::V6(addr) => addr.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.contains(':') {
            s.parse::<Ipv6Addr>().map(IpAddress::V6)
        } else {
            s.parse::<Ipv4Addr>().map(IpAddress::V4)
        };
        parsed.map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl TryFrom<String> for IpAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IpAddress> for String {
    fn from(addr: IpAddress) -> String {
        addr.to_string()
    }
}

// --- IP network ---

/// An IP network in CIDR notation (e.g. `10.0.0.0/24` or `2001:db8::/32`).
///
/// Host bits are cleared on construction, so the textual form is always the
/// network CIDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IpNetwork {
    address: IpAddress,
    prefix_len: u8,
}

impl IpNetwork {
    /// Creates a network, rejecting prefix lengths longer than the family allows.
    pub fn new(address: IpAddress, prefix_len: u8) -> Result<Self, ParseError> {
        let address = match address {
            IpAddress::V4(addr) if prefix_len <= 32 => {
                let mask = u32::MAX.checked_shl(32 - prefix_len as u32).unwrap_or(0);
                IpAddress::V4(Ipv4Addr::from(u32::from(addr) & mask))
            }
            IpAddress::V6(addr) if prefix_len <= 128 => {
                let mask = u128::MAX.checked_shl(128 - prefix_len as u32).unwrap_or(0);
                IpAddress::V6(Ipv6Addr::from(u128::from(addr) & mask))
            }
            _ => {
                return Err(ParseError::InvalidIpNetwork(format!(
                    "{}/{}",
                    address, prefix_len
                )));
            }
        };
        Ok(Self {
            address,
            prefix_len,
        })
    }

    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

impl Versioned for IpNetwork {
    fn ip_version(&self) -> IpVersion {
        self.address.ip_version()
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for IpNetwork {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseError::InvalidIpNetwork(s.to_string()))?;
        let address: IpAddress = addr
            .parse()
            .map_err(|_| ParseError::InvalidIpNetwork(s.to_string()))?;
        let prefix_len: u8 = len
            .parse()
            .map_err(|_| ParseError::InvalidIpNetwork(s.to_string()))?;
        IpNetwork::new(address, prefix_len).map_err(|_| ParseError::InvalidIpNetwork(s.to_string()))
    }
}

impl TryFrom<String> for IpNetwork {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IpNetwork> for String {
    fn from(net: IpNetwork) -> String {
        net.to_string()
    }
}

// --- MAC address ---

/// A 48-bit Ethernet MAC address, displayed as lowercase colon-separated hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains(':') { ':' } else { '-' };

        let parts: Vec<&str> = s.split(separator).collect();
        if parts.len() != 6 {
            return Err(ParseError::InvalidMacAddress(s.to_string()));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseError::InvalidMacAddress(s.to_string()));
            }
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| ParseError::InvalidMacAddress(s.to_string()))?;
        }

        Ok(MacAddress(bytes))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.to_string()
    }
}

// --- Protocol ---

/// A port protocol given either by name (`tcp`, `udp`, ...) or by number.
/// Names are held lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "RawProtocol")]
pub enum Protocol {
    Number(u8),
    Name(String),
}

impl Protocol {
    pub fn from_name(name: &str) -> Self {
        Protocol::Name(name.to_ascii_lowercase())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProtocol {
    Number(u8),
    Name(String),
}

impl From<RawProtocol> for Protocol {
    fn from(raw: RawProtocol) -> Self {
        match raw {
            RawProtocol::Number(n) => Protocol::Number(n),
            RawProtocol::Name(name) => Protocol::from_name(&name),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Number(n) => write!(f, "{}", n),
            Protocol::Name(name) => f.write_str(name),
        }
    }
}
