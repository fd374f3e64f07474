//! Terminal output utilities.
//!
//! Provides formatting helpers for the demonstration binary.

use colored::Colorize;

/// Format a labelled value with the label right-aligned to `width`.
///
/// # Arguments
/// * `label` - The name printed before the value
/// * `value` - The value to format
/// * `width` - The minimum width of the label column
///
/// # Returns
/// A `label: value` line without colour codes
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{label:>width$}: {value_str}")
}

/// Print a labelled value with the label highlighted.
pub fn print_field<T: ToString>(label: &str, value: T, width: usize) {
    let line = format_field(label, value, width);
    match line.split_once(": ") {
        Some((label, value)) => println!("{}: {}", label.cyan(), value),
        None => println!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("hex", "0x7f000001", 6), "   hex: 0x7f000001");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("binary", "0b1", 6), "binary: 0b1");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("numeric", 42, 3), "numeric: 42");
    }
}
