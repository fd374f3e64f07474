//! IP protocol version and the per-version sizes derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;

/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// IP protocol version of an address.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpVersion {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl IpVersion {
    /// Number of bits in an address, i.e. the longest valid prefix.
    pub const fn max_prefix_length(self) -> u8 {
        match self {
            IpVersion::V4 => MAX_LENGTH_V4,
            IpVersion::V6 => MAX_LENGTH_V6,
        }
    }

    /// Number of bytes in the canonical representation.
    pub const fn octet_count(self) -> usize {
        self.max_prefix_length() as usize / 8
    }

    /// Version for a canonical buffer of `len` bytes.
    pub const fn from_octet_count(len: usize) -> Option<IpVersion> {
        match len {
            4 => Some(IpVersion::V4),
            16 => Some(IpVersion::V6),
            _ => None,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(IpVersion::V4.max_prefix_length(), 32);
        assert_eq!(IpVersion::V6.max_prefix_length(), 128);
        assert_eq!(IpVersion::V4.octet_count(), 4);
        assert_eq!(IpVersion::V6.octet_count(), 16);
    }

    #[test]
    fn test_from_octet_count() {
        assert_eq!(IpVersion::from_octet_count(4), Some(IpVersion::V4));
        assert_eq!(IpVersion::from_octet_count(16), Some(IpVersion::V6));
        assert_eq!(IpVersion::from_octet_count(6), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(IpVersion::V4.to_string(), "IPv4");
        assert_eq!(IpVersion::V6.to_string(), "IPv6");
    }
}
