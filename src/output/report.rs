//! Serializable summaries of addresses, networks and ranges.

use crate::models::{Address, AddressRange, IpRange, IpVersion, Network};
use serde::Serialize;

/// Every representation of one address.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddressReport {
    pub ip: String,
    pub expanded: String,
    pub bin: String,
    pub hex: String,
    /// Decimal string; `u128` does not survive most JSON readers.
    pub numeric: String,
    pub version: IpVersion,
    pub max_prefix_length: u8,
    pub octets: usize,
}

impl From<&Address> for AddressReport {
    fn from(ip: &Address) -> AddressReport {
        AddressReport {
            ip: ip.to_text(),
            expanded: ip.to_text_expanded(),
            bin: ip.to_binary(),
            hex: ip.to_hex(),
            numeric: ip.to_numeric().to_string(),
            version: ip.version(),
            max_prefix_length: ip.max_prefix_length(),
            octets: ip.octet_count(),
        }
    }
}

/// Address, mask and bounds of a network.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkReport {
    pub ip: String,
    pub netmask: String,
    pub cidr: String,
    pub broadcast_ip: String,
    pub prefix_length: u8,
}

impl From<&Network> for NetworkReport {
    fn from(network: &Network) -> NetworkReport {
        NetworkReport {
            ip: network.network_address().to_text(),
            netmask: network.netmask().to_text(),
            cidr: network.to_cidr(),
            broadcast_ip: network.broadcast_address().to_text(),
            prefix_length: network.prefix_length(),
        }
    }
}

/// Bounds, size and covering networks of a range.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub first_ip: String,
    pub last_ip: String,
    /// `None` for the whole IPv6 space.
    pub count: Option<String>,
    pub span_network: Option<String>,
    pub networks: Vec<String>,
}

impl From<&IpRange> for RangeReport {
    fn from(range: &IpRange) -> RangeReport {
        RangeReport {
            first_ip: range.first_address().to_text(),
            last_ip: range.last_address().to_text(),
            count: range.count().map(|c| c.to_string()),
            span_network: range.span_network().ok().map(|n| n.to_cidr()),
            networks: range
                .networks()
                .map(|nets| nets.iter().map(|n| n.to_cidr()).collect())
                .unwrap_or_default(),
        }
    }
}
