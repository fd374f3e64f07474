//! IPv4/IPv6 address value.
//!
//! Provides [`Address`], a version-tagged canonical byte buffer, with
//! conversions to every supported notation plus comparison and arithmetic.

use super::IpVersion;
use crate::codec;
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Immutable IPv4 or IPv6 address.
///
/// Only the first [`IpVersion::octet_count`] bytes of the buffer are
/// meaningful; the rest is always zero so derived equality and hashing stay
/// consistent.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    version: IpVersion,
    octets: [u8; 16],
}

impl Address {
    /// Build an address from its canonical bytes (4 for IPv4, 16 for IPv6).
    pub fn from_bytes(bytes: &[u8]) -> Result<Address, IpError> {
        let version = IpVersion::from_octet_count(bytes.len()).ok_or_else(|| {
            IpError::InvalidFormat(format!("{} octets is neither IPv4 nor IPv6", bytes.len()))
        })?;
        let mut octets = [0u8; 16];
        octets[..bytes.len()].copy_from_slice(bytes);
        Ok(Address { version, octets })
    }

    /// Build an address from an integer value of the given version's width.
    pub fn from_integer(value: u128, version: IpVersion) -> Result<Address, IpError> {
        let bytes = value.to_be_bytes();
        let skip = 16 - version.octet_count();
        if bytes[..skip].iter().any(|b| *b != 0) {
            return Err(IpError::InvalidArgument(format!(
                "{value} does not fit in an {version} address"
            )));
        }
        Address::from_bytes(&bytes[skip..])
    }

    /// Parse dotted-decimal IPv4 or colon-hex IPv6 text.
    pub fn from_text(input: &str) -> Result<Address, IpError> {
        Address::from_bytes(&codec::parse_text(input)?)
    }

    /// Parse a `0b` binary literal of 32 or 128 bits.
    pub fn from_binary(input: &str) -> Result<Address, IpError> {
        Address::from_bytes(&codec::parse_binary(input)?)
    }

    /// Parse a `0x` hex literal of 8 or 32 digits.
    pub fn from_hex(input: &str) -> Result<Address, IpError> {
        Address::from_bytes(&codec::parse_hex(input)?)
    }

    /// Parse a decimal integer as an address of the given version.
    ///
    /// # Examples
    /// ```
    /// use ipkit::{Address, IpVersion};
    /// let ip = Address::from_numeric("2130706433", IpVersion::V4).unwrap();
    /// assert_eq!(ip.to_text(), "127.0.0.1");
    /// let ip = Address::from_numeric("2130706433", IpVersion::V6).unwrap();
    /// assert_eq!(ip.to_text(), "::7f00:1");
    /// ```
    pub fn from_numeric(input: &str, version: IpVersion) -> Result<Address, IpError> {
        Address::from_bytes(&codec::parse_numeric(input, version.octet_count())?)
    }

    /// Parse any supported notation.
    ///
    /// `0x` selects hex, `0b` selects binary, a string of digits is read as a
    /// numeric IPv4 address, anything else is parsed as text. Use
    /// [`Address::from_numeric`] for numeric IPv6 input.
    ///
    /// # Examples
    /// ```
    /// use ipkit::Address;
    /// assert_eq!(Address::parse("2130706433").unwrap().to_text(), "127.0.0.1");
    /// assert_eq!(Address::parse("0x0a000001").unwrap().to_text(), "10.0.0.1");
    /// assert_eq!(
    ///     Address::parse("0b11000000101010000000000100000001").unwrap().to_text(),
    ///     "192.168.1.1"
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Address, IpError> {
        if input.starts_with("0x") {
            log::trace!("parse({input}) as hex");
            Address::from_hex(input)
        } else if input.starts_with("0b") {
            log::trace!("parse({input}) as binary");
            Address::from_binary(input)
        } else if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            log::trace!("parse({input}) as numeric IPv4");
            Address::from_numeric(input, IpVersion::V4)
        } else {
            log::trace!("parse({input}) as text");
            Address::from_text(input)
        }
    }

    /// Check whether `input` is valid dotted-decimal or colon-hex text.
    pub fn is_valid(input: &str) -> bool {
        codec::parse_text(input).is_ok()
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// 32 for IPv4, 128 for IPv6.
    pub fn max_prefix_length(&self) -> u8 {
        self.version.max_prefix_length()
    }

    /// 4 for IPv4, 16 for IPv6.
    pub fn octet_count(&self) -> usize {
        self.version.octet_count()
    }

    /// The canonical big-endian bytes.
    pub fn to_in_addr(&self) -> &[u8] {
        &self.octets[..self.octet_count()]
    }

    /// Dotted-decimal for IPv4, compressed colon-hex for IPv6.
    pub fn to_text(&self) -> String {
        codec::to_text(self.to_in_addr())
    }

    /// Like [`Address::to_text`] but IPv6 is written with all eight groups.
    pub fn to_text_expanded(&self) -> String {
        match self.version {
            IpVersion::V4 => codec::format_ipv4(self.to_in_addr()),
            IpVersion::V6 => codec::format_ipv6_expanded(self.to_in_addr()),
        }
    }

    pub fn to_binary(&self) -> String {
        codec::to_binary(self.to_in_addr())
    }

    pub fn to_hex(&self) -> String {
        codec::to_hex(self.to_in_addr())
    }

    /// The address as an unsigned integer.
    pub fn to_numeric(&self) -> u128 {
        codec::to_numeric(self.to_in_addr())
    }

    /// Byte-wise comparison, most significant byte first.
    ///
    /// Addresses of different versions cannot be compared.
    pub fn compare(&self, other: &Address) -> Result<Ordering, IpError> {
        self.ensure_same_version(other)?;
        Ok(self.to_in_addr().cmp(other.to_in_addr()))
    }

    /// The address `step` positions above this one.
    ///
    /// Carrying past the highest address fails with [`IpError::OutOfRange`].
    ///
    /// # Examples
    /// ```
    /// use ipkit::Address;
    /// let ip = Address::parse("10.0.0.255").unwrap();
    /// assert_eq!(ip.next(1).unwrap().to_text(), "10.0.1.0");
    /// assert!(Address::parse("255.255.255.255").unwrap().next(1).is_err());
    /// ```
    pub fn next(&self, step: u128) -> Result<Address, IpError> {
        let mut octets = self.octets;
        let len = self.octet_count();
        let mut carry = step;
        for byte in octets[..len].iter_mut().rev() {
            let sum = u128::from(*byte) + (carry & 0xff);
            *byte = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
        }
        if carry != 0 {
            return Err(IpError::OutOfRange(format!("{self} + {step}")));
        }
        Ok(Address {
            version: self.version,
            octets,
        })
    }

    /// The address `step` positions below this one.
    ///
    /// Borrowing below the zero address fails with [`IpError::OutOfRange`].
    pub fn prev(&self, step: u128) -> Result<Address, IpError> {
        let mut octets = self.octets;
        let len = self.octet_count();
        let mut borrow = step;
        for byte in octets[..len].iter_mut().rev() {
            let sub = (borrow & 0xff) as u8;
            borrow >>= 8;
            let (diff, underflow) = byte.overflowing_sub(sub);
            *byte = diff;
            if underflow {
                borrow += 1;
            }
        }
        if borrow != 0 {
            return Err(IpError::OutOfRange(format!("{self} - {step}")));
        }
        Ok(Address {
            version: self.version,
            octets,
        })
    }

    /// Byte-wise AND of two addresses of the same version.
    pub fn and(&self, other: &Address) -> Result<Address, IpError> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Byte-wise OR of two addresses of the same version.
    pub fn or(&self, other: &Address) -> Result<Address, IpError> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Byte-wise XOR of two addresses of the same version.
    pub fn xor(&self, other: &Address) -> Result<Address, IpError> {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Bitwise complement of every byte.
    pub fn invert(&self) -> Address {
        let mut octets = [0u8; 16];
        for (out, byte) in octets.iter_mut().zip(self.to_in_addr()) {
            *out = !byte;
        }
        Address {
            version: self.version,
            octets,
        }
    }

    /// Number of zero bits before the first one bit.
    pub fn leading_zeros(&self) -> u32 {
        let mut zeros = 0;
        for byte in self.to_in_addr() {
            if *byte != 0 {
                return zeros + byte.leading_zeros();
            }
            zeros += 8;
        }
        zeros
    }

    /// Number of one bits before the first zero bit.
    pub fn leading_ones(&self) -> u32 {
        self.invert().leading_zeros()
    }

    /// Number of zero bits after the last one bit.
    pub fn trailing_zeros(&self) -> u32 {
        let mut zeros = 0;
        for byte in self.to_in_addr().iter().rev() {
            if *byte != 0 {
                return zeros + byte.trailing_zeros();
            }
            zeros += 8;
        }
        zeros
    }

    pub(crate) fn ensure_same_version(&self, other: &Address) -> Result<(), IpError> {
        if self.version != other.version {
            return Err(IpError::mismatch(self.version, other.version));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Address, op: impl Fn(u8, u8) -> u8) -> Result<Address, IpError> {
        self.ensure_same_version(other)?;
        let mut octets = [0u8; 16];
        for (i, out) in octets[..self.octet_count()].iter_mut().enumerate() {
            *out = op(self.octets[i], other.octets[i]);
        }
        Ok(Address {
            version: self.version,
            octets,
        })
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        let mut octets = [0u8; 16];
        octets[..4].copy_from_slice(&addr.octets());
        Address {
            version: IpVersion::V4,
            octets,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address {
            version: IpVersion::V6,
            octets: addr.octets(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        match addr.version {
            IpVersion::V4 => {
                let [a, b, c, d, ..] = addr.octets;
                IpAddr::V4(Ipv4Addr::new(a, b, c, d))
            }
            IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(addr.octets)),
        }
    }
}

impl FromStr for Address {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Address, IpError> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", self.to_text())
    }
}

/// Same ordering as [`Address::compare`]; `None` across versions.
impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
