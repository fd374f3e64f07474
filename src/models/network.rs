//! CIDR network: a masked network address paired with its netmask.

use super::{Address, IpVersion, Netmask};
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calculate the broadcast address for an address and netmask.
///
/// # Examples
/// ```
/// use ipkit::models::broadcast_addr;
/// use ipkit::{Address, Netmask};
/// let ip = Address::parse("192.168.1.42").unwrap();
/// let mask = Netmask::parse("255.255.255.0").unwrap();
/// assert_eq!(broadcast_addr(&ip, &mask).unwrap().to_text(), "192.168.1.255");
/// ```
pub fn broadcast_addr(addr: &Address, netmask: &Netmask) -> Result<Address, IpError> {
    addr.or(&netmask.invert())
}

/// Get the network address for an address and netmask.
pub fn cut_addr(addr: &Address, netmask: &Netmask) -> Result<Address, IpError> {
    addr.and(netmask)
}

/// An IPv4 or IPv6 network in CIDR terms.
///
/// The network address is always stored masked, and the broadcast address is
/// derived at construction, so every value is internally consistent.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    network_address: Address,
    netmask: Netmask,
    broadcast_address: Address,
}

impl Network {
    /// Combine an address with a netmask of the same version.
    ///
    /// Host bits of `address` are cleared.
    pub fn new(address: Address, netmask: Netmask) -> Result<Network, IpError> {
        if address.version() != netmask.version() {
            return Err(IpError::mismatch(netmask.version(), address.version()));
        }
        let network_address = cut_addr(&address, &netmask)?;
        let broadcast_address = broadcast_addr(&network_address, &netmask)?;
        log::trace!(
            "Network::new({address}, {netmask}) -> {network_address}/{}",
            netmask.prefix_length()
        );
        Ok(Network {
            network_address,
            netmask,
            broadcast_address,
        })
    }

    /// Network of `address` with a `len` bit prefix.
    pub fn from_prefix_length(address: Address, len: u8) -> Result<Network, IpError> {
        Network::new(address, Netmask::from_prefix_length(len, address.version())?)
    }

    /// Parse `ip/prefix`, `ip netmask`, or a bare `ip` (a full-width host network).
    ///
    /// # Examples
    /// ```
    /// use ipkit::Network;
    /// let net = Network::parse("192.168.1.0/24").unwrap();
    /// assert_eq!(net.broadcast_address().to_text(), "192.168.1.255");
    /// let net = Network::parse("192.168.100.1 255.255.255.0").unwrap();
    /// assert_eq!(net.to_cidr(), "192.168.100.0/24");
    /// assert_eq!(Network::parse("127.0.0.1").unwrap().to_cidr(), "127.0.0.1/32");
    /// ```
    pub fn parse(input: &str) -> Result<Network, IpError> {
        let input = input.trim();
        if let Some((addr_part, prefix_part)) = input.split_once('/') {
            let address = Address::parse(addr_part)?;
            if prefix_part.is_empty() || !prefix_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IpError::format(input));
            }
            let prefix: u8 = prefix_part.parse().map_err(|_| {
                IpError::InvalidArgument(format!("prefix length {prefix_part} is too long"))
            })?;
            Network::from_prefix_length(address, prefix)
        } else if let Some((addr_part, mask_part)) = input.split_once(' ') {
            let address = Address::parse(addr_part)?;
            let netmask = Netmask::parse(mask_part)?;
            Network::new(address, netmask)
        } else {
            let address = Address::parse(input)?;
            Network::from_prefix_length(address, address.max_prefix_length())
        }
    }

    pub fn version(&self) -> IpVersion {
        self.network_address.version()
    }

    /// The lowest address in the network (host bits cleared).
    pub fn network_address(&self) -> Address {
        self.network_address
    }

    pub fn netmask(&self) -> Netmask {
        self.netmask
    }

    pub fn prefix_length(&self) -> u8 {
        self.netmask.prefix_length()
    }

    /// The highest address in the network: `network | !netmask`.
    pub fn broadcast_address(&self) -> Address {
        self.broadcast_address
    }

    /// A copy of this network based on `address`, re-masked with the current netmask.
    pub fn with_network_address(&self, address: Address) -> Result<Network, IpError> {
        Network::new(address, self.netmask)
    }

    /// A copy of this network with `netmask` applied to the current network address.
    pub fn with_netmask(&self, netmask: Netmask) -> Result<Network, IpError> {
        Network::new(self.network_address, netmask)
    }

    /// Like [`Network::with_netmask`] with a mask built from `len`.
    pub fn with_prefix_length(&self, len: u8) -> Result<Network, IpError> {
        self.with_netmask(Netmask::from_prefix_length(len, self.version())?)
    }

    /// `<network address>/<prefix length>`.
    pub fn to_cidr(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix_length())
    }
}

impl FromStr for Network {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Network, IpError> {
        Network::parse(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_cidr())
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Network({}, broadcast {})",
            self.to_cidr(),
            self.broadcast_address
        )
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_cidr())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
