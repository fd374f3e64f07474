//! Binary (`0b`), hexadecimal (`0x`) and decimal numeric address literals.

use crate::error::IpError;
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

/// `0b` followed by exactly 32 or 128 bits.
static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();

/// `0x` followed by exactly 8 or 32 hex digits.
static HEX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| Regex::new(r"^0b([01]{32}|[01]{128})$").expect("Invalid Regex"))
}

fn get_hex_regex() -> &'static Regex {
    HEX_REGEX.get_or_init(|| {
        Regex::new(r"^0x([0-9a-fA-F]{8}|[0-9a-fA-F]{32})$").expect("Invalid Regex")
    })
}

/// Parse a `0b` literal; every 8 bits become one byte, most significant bit first.
///
/// # Examples
/// ```
/// use ipkit::codec::parse_binary;
/// let bytes = parse_binary("0b11000000101010000000000100000001").unwrap();
/// assert_eq!(bytes, vec![192, 168, 1, 1]);
/// ```
pub fn parse_binary(input: &str) -> Result<Vec<u8>, IpError> {
    if !get_binary_regex().is_match(input) {
        return Err(IpError::format(input));
    }
    let bytes = input[2..]
        .as_bytes()
        .chunks(8)
        .map(|bits| bits.iter().fold(0u8, |acc, bit| (acc << 1) | (bit - b'0')))
        .collect();
    Ok(bytes)
}

/// `0b` followed by each byte as eight zero-padded bits.
pub fn to_binary(octets: &[u8]) -> String {
    format!("0b{}", octets.iter().map(|b| format!("{b:08b}")).join(""))
}

/// Parse a `0x` literal; every two hex digits become one byte.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, IpError> {
    if !get_hex_regex().is_match(input) {
        return Err(IpError::format(input));
    }
    let digits = &input[2..];
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| IpError::format(input)))
        .collect()
}

/// `0x` followed by the lowercase hex of the bytes.
pub fn to_hex(octets: &[u8]) -> String {
    format!("0x{}", octets.iter().map(|b| format!("{b:02x}")).join(""))
}

/// Parse a decimal string as a big-endian unsigned integer `octets` bytes wide.
///
/// Byte `i` is `floor(num / 256^(octets - 1 - i)) mod 256`. Values wider than
/// the target, signs and any non-digit character are rejected.
///
/// # Examples
/// ```
/// use ipkit::codec::parse_numeric;
/// assert_eq!(parse_numeric("2130706433", 4).unwrap(), vec![127, 0, 0, 1]);
/// assert!(parse_numeric("4294967296", 4).is_err());
/// ```
pub fn parse_numeric(input: &str, octets: usize) -> Result<Vec<u8>, IpError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IpError::format(input));
    }
    // u128 parse rejects anything past 2^128 - 1
    let mut num: u128 = input.parse().map_err(|_| IpError::format(input))?;
    let bits = octets * 8;
    if bits < 128 && num >> bits != 0 {
        return Err(IpError::format(input));
    }

    let mut bytes = vec![0u8; octets];
    for byte in bytes.iter_mut().rev() {
        *byte = (num % 256) as u8;
        num /= 256;
    }
    Ok(bytes)
}

/// Big-endian positional sum of the bytes.
pub fn to_numeric(octets: &[u8]) -> u128 {
    octets
        .iter()
        .fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
}
