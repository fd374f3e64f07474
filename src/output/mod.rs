//! Output formatting for address data.
//!
//! This module handles formatting and outputting values:
//! - [`report`] - serde-serializable summaries
//! - [`terminal`] - terminal output with colors

mod report;
mod terminal;

pub use report::{AddressReport, NetworkReport, RangeReport};
pub use terminal::{format_field, print_field};
