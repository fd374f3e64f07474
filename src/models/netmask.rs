//! Netmask: an address whose bits are a run of ones followed by zeros.

use super::{Address, IpVersion};
use crate::error::IpError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::OnceLock;

/// Binary form of a valid mask: ones, then zeros.
static NETMASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_netmask_regex() -> &'static Regex {
    NETMASK_REGEX.get_or_init(|| Regex::new(r"^0b1*0*$").expect("Invalid Regex"))
}

/// Convert a prefix length to its mask as an integer of the version's width.
///
/// # Examples
/// ```
/// use ipkit::models::{get_cidr_mask, IpVersion};
/// assert_eq!(get_cidr_mask(24, IpVersion::V4).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0, IpVersion::V6).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8, version: IpVersion) -> Result<u128, IpError> {
    let max = version.max_prefix_length();
    if len > max {
        return Err(IpError::InvalidArgument(format!(
            "prefix length {len} is longer than {max} for {version}"
        )));
    }
    let all_bits = u128::MAX >> (128 - u32::from(max));
    let right_len = u32::from(max - len);
    Ok(all_bits.checked_shl(right_len).unwrap_or(0) & all_bits)
}

/// A validated netmask.
///
/// Dereferences to the underlying [`Address`] so it can be formatted,
/// compared and combined like any other address.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Netmask {
    address: Address,
    prefix_length: u8,
}

impl Netmask {
    /// Wrap an address, rejecting any bit pattern that is not `1*0*`.
    pub fn new(address: Address) -> Result<Netmask, IpError> {
        if !get_netmask_regex().is_match(&address.to_binary()) {
            return Err(IpError::InvalidNetmask(address.to_text()));
        }
        Ok(Netmask {
            address,
            prefix_length: address.leading_ones() as u8,
        })
    }

    /// Parse a mask in any address notation (e.g. `255.255.255.0`).
    pub fn parse(input: &str) -> Result<Netmask, IpError> {
        Netmask::new(Address::parse(input)?)
    }

    /// Check whether `input` is an address and a valid mask.
    pub fn is_valid(input: &str) -> bool {
        Netmask::parse(input).is_ok()
    }

    /// Build the mask of `length` leading ones for the given version.
    ///
    /// # Examples
    /// ```
    /// use ipkit::{IpVersion, Netmask};
    /// let mask = Netmask::from_prefix_length(24, IpVersion::V4).unwrap();
    /// assert_eq!(mask.to_text(), "255.255.255.0");
    /// assert!(Netmask::from_prefix_length(33, IpVersion::V4).is_err());
    /// ```
    pub fn from_prefix_length(length: u8, version: IpVersion) -> Result<Netmask, IpError> {
        let mask = get_cidr_mask(length, version)?;
        Ok(Netmask {
            address: Address::from_integer(mask, version)?,
            prefix_length: length,
        })
    }

    /// Count of leading one bits.
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl Deref for Netmask {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.address
    }
}

impl AsRef<Address> for Netmask {
    fn as_ref(&self) -> &Address {
        &self.address
    }
}

impl From<Netmask> for Address {
    fn from(mask: Netmask) -> Address {
        mask.address
    }
}

impl TryFrom<Address> for Netmask {
    type Error = IpError;

    fn try_from(address: Address) -> Result<Netmask, IpError> {
        Netmask::new(address)
    }
}

impl FromStr for Netmask {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Netmask, IpError> {
        Netmask::parse(s)
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl fmt::Debug for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Netmask({}, /{})", self.address, self.prefix_length)
    }
}

impl Serialize for Netmask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.address.to_text())
    }
}

impl<'de> Deserialize<'de> for Netmask {
    fn deserialize<D>(deserializer: D) -> Result<Netmask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Netmask::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0, IpVersion::V4).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8, IpVersion::V4).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16, IpVersion::V4).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24, IpVersion::V4).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32, IpVersion::V4).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33, IpVersion::V4).is_err());

        assert_eq!(get_cidr_mask(128, IpVersion::V6).unwrap(), u128::MAX);
        assert_eq!(get_cidr_mask(64, IpVersion::V6).unwrap(), u128::MAX << 64);
        assert!(get_cidr_mask(129, IpVersion::V6).is_err());
    }

    #[test]
    fn test_parse_valid_masks() {
        let mask = Netmask::parse("255.255.255.0").unwrap();
        assert_eq!(mask.prefix_length(), 24);

        let mask = Netmask::parse("255.255.128.0").unwrap();
        assert_eq!(mask.prefix_length(), 17);

        assert_eq!(Netmask::parse("0.0.0.0").unwrap().prefix_length(), 0);
        assert_eq!(Netmask::parse("255.255.255.255").unwrap().prefix_length(), 32);
        assert_eq!(Netmask::parse("ffff:ffff:ffff:ffff::").unwrap().prefix_length(), 64);
    }

    #[test]
    fn test_parse_invalid_masks() {
        assert_eq!(
            Netmask::parse("255.0.255.0").unwrap_err(),
            IpError::InvalidNetmask("255.0.255.0".to_string())
        );
        assert!(matches!(
            Netmask::parse("0.0.0.1"),
            Err(IpError::InvalidNetmask(_))
        ));
        assert!(matches!(
            Netmask::parse("255.255.255.254.1"),
            Err(IpError::InvalidFormat(_))
        ));
        assert!(!Netmask::is_valid("255.255.0.255"));
        assert!(Netmask::is_valid("255.255.0.0"));
    }

    #[test]
    fn test_prefix_length_round_trip() {
        for version in [IpVersion::V4, IpVersion::V6] {
            for p in 0..=version.max_prefix_length() {
                let mask = Netmask::from_prefix_length(p, version).unwrap();
                assert_eq!(mask.prefix_length(), p);
                assert_eq!(mask.version(), version);
                // a mask built from a length passes the pattern check too
                assert_eq!(Netmask::new(mask.address()).unwrap(), mask);
            }
        }
    }

    #[test]
    fn test_from_prefix_length() {
        assert_eq!(
            Netmask::from_prefix_length(24, IpVersion::V4).unwrap().to_text(),
            "255.255.255.0"
        );
        assert_eq!(
            Netmask::from_prefix_length(0, IpVersion::V4).unwrap().to_text(),
            "0.0.0.0"
        );
        assert_eq!(
            Netmask::from_prefix_length(48, IpVersion::V6).unwrap().to_text(),
            "ffff:ffff:ffff::"
        );
        assert!(matches!(
            Netmask::from_prefix_length(33, IpVersion::V4),
            Err(IpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serde() {
        let mask = Netmask::from_prefix_length(20, IpVersion::V4).unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "\"255.255.240.0\"");
        assert_eq!(serde_json::from_str::<Netmask>(&json).unwrap(), mask);
        assert!(serde_json::from_str::<Netmask>("\"255.0.255.0\"").is_err());
    }
}
