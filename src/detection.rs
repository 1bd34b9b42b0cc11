//! Address format detection from textual prefixes.

use crate::types::AddressFormat;

/// Classify a raw address string by its prefix.
///
/// Matching is case-sensitive and the literal prefixes (`0x`, `strk1`,
/// `strkx1`, `strku1`) are mutually exclusive, so check order only keeps
/// the more specific `strkx1`/`strku1` literals from ever being shadowed
/// by `strk1`. Total function: anything unrecognized is
/// [`AddressFormat::Unknown`].
pub fn detect_format(input: &str) -> AddressFormat {
    let trimmed = input.trim();
    if trimmed.starts_with("0x") {
        AddressFormat::Legacy
    } else if trimmed.starts_with("strkx1") {
        AddressFormat::Shielded
    } else if trimmed.starts_with("strku1") {
        AddressFormat::Unified
    } else if trimmed.starts_with("strk1") {
        AddressFormat::Public
    } else {
        AddressFormat::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_legacy() {
        assert_eq!(detect_format("0x0"), AddressFormat::Legacy);
        assert_eq!(detect_format("0xdeadbeef"), AddressFormat::Legacy);
        // Even a bare prefix is tagged; validation rejects it later.
        assert_eq!(detect_format("0x"), AddressFormat::Legacy);
    }

    #[test]
    fn test_detect_bech32_formats() {
        assert_eq!(detect_format("strk1qqqq"), AddressFormat::Public);
        assert_eq!(detect_format("strkx1qqqq"), AddressFormat::Shielded);
        assert_eq!(detect_format("strku1qqqq"), AddressFormat::Unified);
    }

    #[test]
    fn test_detect_trims_whitespace() {
        assert_eq!(detect_format("  0x1  "), AddressFormat::Legacy);
        assert_eq!(detect_format("\tstrk1abc\n"), AddressFormat::Public);
    }

    #[test]
    fn test_detect_case_sensitive() {
        assert_eq!(detect_format("0X1"), AddressFormat::Unknown);
        assert_eq!(detect_format("STRK1AAA"), AddressFormat::Unknown);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format(""), AddressFormat::Unknown);
        assert_eq!(detect_format("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"), AddressFormat::Unknown);
        assert_eq!(detect_format("strk"), AddressFormat::Unknown);
        assert_eq!(detect_format("not an address"), AddressFormat::Unknown);
    }
}
