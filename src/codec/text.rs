//! Dotted-decimal IPv4 and colon-hex IPv6 notation.

use crate::error::IpError;
use itertools::Itertools;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Parse dotted-decimal IPv4 or colon-hex IPv6 text into canonical bytes.
///
/// The version follows the syntax: text containing a `:` can only be IPv6.
/// IPv6 accepts `::` compression and an embedded dotted-quad suffix.
///
/// # Examples
/// ```
/// use ipkit::codec::parse_text;
/// assert_eq!(parse_text("127.0.0.1").unwrap(), vec![127, 0, 0, 1]);
/// assert_eq!(parse_text("::7f00:1").unwrap(), parse_text("::127.0.0.1").unwrap());
/// ```
pub fn parse_text(input: &str) -> Result<Vec<u8>, IpError> {
    if input.contains(':') {
        let addr: Ipv6Addr = input.parse().map_err(|_| IpError::format(input))?;
        Ok(addr.octets().to_vec())
    } else {
        let addr: Ipv4Addr = input.parse().map_err(|_| IpError::format(input))?;
        Ok(addr.octets().to_vec())
    }
}

/// Canonical text for a 4 or 16 byte buffer (IPv6 is compressed).
pub fn to_text(octets: &[u8]) -> String {
    if octets.len() == 4 {
        format_ipv4(octets)
    } else {
        format_ipv6(octets)
    }
}

/// Dotted-decimal form of IPv4 bytes.
pub fn format_ipv4(octets: &[u8]) -> String {
    octets.iter().join(".")
}

/// Shortest IPv6 form: lowercase, no leading zeros, and the longest run of
/// two or more zero groups (leftmost on ties) replaced by `::`.
pub fn format_ipv6(octets: &[u8]) -> String {
    let groups = groups(octets);

    let (mut best_start, mut best_len) = (0, 0);
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        if i - start > best_len {
            best_start = start;
            best_len = i - start;
        }
    }

    let hex = |part: &[u16]| part.iter().map(|g| format!("{g:x}")).join(":");
    if best_len < 2 {
        hex(&groups[..])
    } else {
        format!(
            "{}::{}",
            hex(&groups[..best_start]),
            hex(&groups[best_start + best_len..])
        )
    }
}

/// Full eight-group IPv6 form, four lowercase digits per group.
pub fn format_ipv6_expanded(octets: &[u8]) -> String {
    groups(octets).iter().map(|g| format!("{g:04x}")).join(":")
}

/// Compress an IPv6 address to its shortest form.
///
/// A trailing dotted-quad is folded into two hex groups.
///
/// # Examples
/// ```
/// use ipkit::codec::compress;
/// assert_eq!(
///     compress("2001:0DB8:AC10:FE01:0000:0000:0000:0000").unwrap(),
///     "2001:db8:ac10:fe01::"
/// );
/// assert_eq!(compress("::127.0.0.1").unwrap(), "::7f00:1");
/// ```
pub fn compress(input: &str) -> Result<String, IpError> {
    Ok(format_ipv6(&parse_ipv6(input)?))
}

/// Expand an IPv6 address to eight uncompressed groups without dotted notation.
pub fn expand(input: &str) -> Result<String, IpError> {
    Ok(format_ipv6_expanded(&parse_ipv6(input)?))
}

fn parse_ipv6(input: &str) -> Result<[u8; 16], IpError> {
    let addr: Ipv6Addr = input.parse().map_err(|_| IpError::format(input))?;
    Ok(addr.octets())
}

fn groups(octets: &[u8]) -> Vec<u16> {
    octets
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}
