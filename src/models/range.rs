//! Address ranges.
//!
//! [`AddressRange`] is the capability set shared by a plain [`IpRange`] and a
//! [`Network`]: bounds, span network, containment, counting, iteration and
//! decomposition into CIDR blocks.

use super::{Address, Netmask, Network};
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Behaviour shared by everything with a first and last address.
///
/// Implementors only supply the two bounds.
pub trait AddressRange {
    /// Lowest address in the range.
    fn first_address(&self) -> Address;

    /// Highest address in the range (inclusive).
    fn last_address(&self) -> Address;

    /// The smallest network whose bounds enclose this range.
    ///
    /// The prefix length is the number of leading bits `first` and `last`
    /// share, i.e. the leading zeros of `first ^ last`.
    ///
    /// # Examples
    /// ```
    /// use ipkit::{AddressRange, IpRange};
    /// let range = IpRange::parse("192.168.1.10-192.168.1.20").unwrap();
    /// assert_eq!(range.span_network().unwrap().to_cidr(), "192.168.1.0/27");
    /// ```
    fn span_network(&self) -> Result<Network, IpError> {
        let first = self.first_address();
        let diff = first.xor(&self.last_address())?;
        let prefix = diff.leading_zeros() as u8;
        Network::new(first, Netmask::from_prefix_length(prefix, first.version())?)
    }

    /// Whether `target` lies between the bounds; never true across versions.
    fn contains(&self, target: &Address) -> bool {
        self.first_address() <= *target && *target <= self.last_address()
    }

    /// Whether both bounds of `other` lie within this range.
    fn contains_range<R: AddressRange + ?Sized>(&self, other: &R) -> bool
    where
        Self: Sized,
    {
        self.contains(&other.first_address()) && self.contains(&other.last_address())
    }

    /// Number of addresses, both bounds included.
    ///
    /// `None` only when the range is all of IPv6, whose 2^128 addresses do not
    /// fit in a `u128`.
    fn count(&self) -> Option<u128> {
        self.last_address()
            .to_numeric()
            .checked_sub(self.first_address().to_numeric())?
            .checked_add(1)
    }

    /// Lazily walk every address from first to last.
    ///
    /// Yields exactly `count()` items, except for all of IPv6 where `count()`
    /// is `None`.
    fn iter(&self) -> AddressIter {
        AddressIter::new(self.first_address(), self.last_address())
    }

    /// Split the range into the fewest CIDR networks that cover it exactly.
    ///
    /// Each step takes the biggest block that is aligned on the current start
    /// address and does not run past the last address.
    fn networks(&self) -> Result<Vec<Network>, IpError> {
        let last = self.last_address();
        let mut start = self.first_address();
        start.ensure_same_version(&last)?;
        let max = start.max_prefix_length();
        let mut networks = Vec::new();

        loop {
            // alignment of start bounds the biggest block
            let mut prefix = max - (start.trailing_zeros() as u8).min(max);
            let mut network = Network::from_prefix_length(start, prefix)?;
            while network.broadcast_address() > last {
                prefix += 1;
                network = Network::from_prefix_length(start, prefix)?;
            }
            networks.push(network);
            if network.broadcast_address() == last {
                break;
            }
            start = network.broadcast_address().next(1)?;
        }
        Ok(networks)
    }
}

/// Iterator over consecutive addresses, produced by [`AddressRange::iter`].
#[derive(Debug, Clone)]
pub struct AddressIter {
    next: Option<Address>,
    last: Address,
}

impl AddressIter {
    /// Iterate from `first` to `last` inclusive; empty when `first > last`
    /// or the versions differ.
    pub fn new(first: Address, last: Address) -> AddressIter {
        let next = if first <= last { Some(first) } else { None };
        AddressIter { next, last }
    }
}

impl Iterator for AddressIter {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            current.next(1).ok()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(current) => {
                let remaining = (self.last.to_numeric() - current.to_numeric()).checked_add(1);
                match remaining.and_then(|n| usize::try_from(n).ok()) {
                    Some(n) => (n, Some(n)),
                    None => (usize::MAX, None),
                }
            }
        }
    }
}

impl FusedIterator for AddressIter {}

/// A contiguous range of addresses of one version, `first <= last`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct IpRange {
    first: Address,
    last: Address,
}

impl IpRange {
    /// Range from `first` to `last` inclusive.
    ///
    /// Both addresses must share a version, and `first` must not be greater
    /// than `last`.
    pub fn new(first: Address, last: Address) -> Result<IpRange, IpError> {
        first.ensure_same_version(&last)?;
        if first > last {
            return Err(IpError::InvalidArgument(format!(
                "range start {first} is greater than range end {last}"
            )));
        }
        Ok(IpRange { first, last })
    }

    /// Parse a range.
    ///
    /// Accepted forms:
    /// - `192.168.1.0/24` or `192.168.1.0 255.255.255.0` (network bounds)
    /// - `192.168.1.*` (wildcard octets)
    /// - `192.168.1.0-192.168.1.255`
    /// - `127.0.0.1` (single address)
    ///
    /// # Examples
    /// ```
    /// use ipkit::{AddressRange, IpRange};
    /// let range = IpRange::parse("192.168.1.*").unwrap();
    /// assert_eq!(range.to_string(), "192.168.1.0-192.168.1.255");
    /// assert_eq!(range.count(), Some(256));
    /// ```
    pub fn parse(input: &str) -> Result<IpRange, IpError> {
        let input = input.trim();
        if input.contains('/') || input.contains(' ') {
            log::trace!("IpRange::parse({input}) as network");
            Ok(Network::parse(input)?.into())
        } else if input.contains('*') {
            log::trace!("IpRange::parse({input}) as wildcard");
            let first = Address::parse(&input.replace('*', "0"))?;
            let last = Address::parse(&fill_wildcards(input))?;
            IpRange::new(first, last)
        } else if let Some((first, last)) = input.split_once('-') {
            log::trace!("IpRange::parse({input}) as first-last");
            IpRange::new(Address::parse(first)?, Address::parse(last)?)
        } else {
            let address = Address::parse(input)?;
            IpRange::new(address, address)
        }
    }
}

impl AddressRange for IpRange {
    fn first_address(&self) -> Address {
        self.first
    }

    fn last_address(&self) -> Address {
        self.last
    }
}

impl AddressRange for Network {
    fn first_address(&self) -> Address {
        self.network_address()
    }

    fn last_address(&self) -> Address {
        self.broadcast_address()
    }
}

impl From<Network> for IpRange {
    fn from(network: Network) -> IpRange {
        IpRange {
            first: network.network_address(),
            last: network.broadcast_address(),
        }
    }
}

impl IntoIterator for &IpRange {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> AddressIter {
        self.iter()
    }
}

impl IntoIterator for &Network {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> AddressIter {
        self.iter()
    }
}

impl FromStr for IpRange {
    type Err = IpError;

    fn from_str(s: &str) -> Result<IpRange, IpError> {
        IpRange::parse(s)
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl fmt::Debug for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IpRange({}-{})", self.first, self.last)
    }
}

impl Serialize for IpRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpRange {
    fn deserialize<D>(deserializer: D) -> Result<IpRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpRange::parse(&s).map_err(de::Error::custom)
    }
}

/// Replace each `*` with the largest value of its segment: `255` in a dotted
/// quad (including an IPv6 dotted suffix), `ffff` in a colon-hex group.
fn fill_wildcards(input: &str) -> String {
    let (head, tail) = match input.rfind(':') {
        Some(i) => input.split_at(i + 1),
        None => ("", input),
    };
    let tail_fill = if tail.contains('.') { "255" } else { "ffff" };
    format!("{}{}", head.replace('*', "ffff"), tail.replace('*', tail_fill))
}
