//! Error type shared by every parse and arithmetic operation.

use crate::models::IpVersion;
use thiserror::Error;

/// Errors returned by address, netmask, network and range operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpError {
    /// Input text does not match any accepted grammar.
    #[error("invalid IP address format: {0}")]
    InvalidFormat(String),
    /// Bit pattern is not a run of ones followed by a run of zeros.
    #[error("invalid netmask: {0}")]
    InvalidNetmask(String),
    /// Argument outside of its allowed domain (prefix length, range bounds).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// IPv4 and IPv6 operands were mixed.
    #[error("IP version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: IpVersion, found: IpVersion },
    /// Arithmetic carried past either end of the address space.
    #[error("address arithmetic out of range: {0}")]
    OutOfRange(String),
}

impl IpError {
    pub(crate) fn format(input: &str) -> Self {
        IpError::InvalidFormat(input.to_string())
    }

    pub(crate) fn mismatch(expected: IpVersion, found: IpVersion) -> Self {
        IpError::VersionMismatch { expected, found }
    }
}
