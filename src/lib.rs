//! IPv4/IPv6 address toolkit.
//!
//! Parse addresses from text, `0b` binary, `0x` hex or decimal numeric form,
//! convert between those forms, step through the address space, and work
//! with netmasks, CIDR networks and address ranges.
//!
//! ```
//! use ipkit::{Address, AddressRange, IpRange, Network};
//!
//! let ip: Address = "127.0.0.1".parse().unwrap();
//! assert_eq!(ip.to_hex(), "0x7f000001");
//!
//! let net = Network::parse("192.168.1.0/24").unwrap();
//! assert!(net.contains(&"192.168.1.200".parse().unwrap()));
//!
//! let range = IpRange::parse("10.0.0.10-10.0.0.20").unwrap();
//! assert_eq!(range.count(), Some(11));
//! ```

pub mod codec;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use error::IpError;
pub use models::{Address, AddressIter, AddressRange, IpRange, IpVersion, Netmask, Network};

/// Parse `input` as whichever value its syntax describes.
///
/// `/` or a space selects a network, `*` or `-` a range, anything else a
/// single address. Used by the binary to decide what to report on.
pub fn parse_input(input: &str) -> Result<ParsedInput, IpError> {
    let input = input.trim();
    if input.contains('/') || input.contains(' ') {
        Network::parse(input).map(ParsedInput::Network)
    } else if input.contains('*') || input.contains('-') {
        IpRange::parse(input).map(ParsedInput::Range)
    } else {
        Address::parse(input).map(ParsedInput::Address)
    }
}

/// Result of [`parse_input`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    Address(Address),
    Network(Network),
    Range(IpRange),
}
