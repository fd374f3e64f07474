//! Conversion between canonical address bytes and their external forms.
//!
//! Every function here works on plain byte buffers (4 bytes for IPv4, 16 for
//! IPv6) so the [`crate::models::Address`] type can funnel all of its
//! constructors and formatters through one place:
//! - [`text`] - dotted-decimal and colon-hex notation, IPv6 compress/expand
//! - [`radix`] - `0b` binary, `0x` hex and decimal numeric literals

mod radix;
mod text;

pub use radix::{parse_binary, parse_hex, parse_numeric, to_binary, to_hex, to_numeric};
pub use text::{
    compress, expand, format_ipv4, format_ipv6, format_ipv6_expanded, parse_text, to_text,
};
