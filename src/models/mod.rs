//! Address value types.
//!
//! This module contains the core data structures of the crate:
//! - [`Address`] - IPv4/IPv6 address with conversions and arithmetic
//! - [`Netmask`] - contiguous prefix mask
//! - [`Network`] - CIDR network with broadcast address
//! - [`IpRange`] and [`AddressRange`] - address ranges and their shared behaviour

mod address;
mod netmask;
mod network;
mod range;
mod version;

// Re-export public types
pub use address::Address;
pub use netmask::{get_cidr_mask, Netmask};
pub use network::{broadcast_addr, cut_addr, Network};
pub use range::{AddressIter, AddressRange, IpRange};
pub use version::{IpVersion, MAX_LENGTH_V4, MAX_LENGTH_V6};
