//! Legacy hexadecimal address validation and felt252 helpers.

use crate::error::AddressError;
use crate::types::{AddressFormat, ParsedData, ValidationResult};

/// Hex digits in a full-width felt252 encoding.
const FELT_HEX_DIGITS: usize = 64;

/// Validate a legacy `0x`-prefixed hexadecimal address.
///
/// On success the result carries the canonical form: zero-padded to 64
/// lowercase hex digits behind the `0x` prefix.
pub fn validate_legacy(input: &str) -> ValidationResult {
    match parse_legacy(input.trim()) {
        Ok(felt252) => ValidationResult::valid(
            AddressFormat::Legacy,
            ParsedData {
                felt252: Some(felt252),
                ..Default::default()
            },
        ),
        Err(e) => ValidationResult::invalid(AddressFormat::Legacy, e.to_string()),
    }
}

fn parse_legacy(input: &str) -> Result<String, AddressError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or(AddressError::MissingHexPrefix)?;

    if digits.is_empty() {
        return Err(AddressError::EmptyHexDigits);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHexDigits);
    }
    if digits.len() > FELT_HEX_DIGITS {
        return Err(AddressError::HexTooLong {
            actual: digits.len(),
        });
    }

    let padded = format!("{:0>64}", digits.to_ascii_lowercase());
    let bytes = hex::decode(&padded).map_err(|_| AddressError::InvalidHexDigits)?;
    let mut value = [0u8; 32];
    value.copy_from_slice(&bytes);

    if exceeds_felt_max(&value) {
        return Err(AddressError::ExceedsFeltMax);
    }

    Ok(format!("0x{}", padded))
}

/// Whether a 32-byte big-endian value exceeds `FELT_MAX = 2^251 - 1`.
///
/// Equal-width big-endian byte comparison is numeric comparison, so no
/// big-integer arithmetic is needed: the bound is exceeded exactly when
/// the bytes compare above [`crate::FELT_MAX_BYTES`].
pub(crate) fn exceeds_felt_max(value: &[u8; 32]) -> bool {
    value[..] > crate::FELT_MAX_BYTES[..]
}

/// Canonical `0x`-prefixed lowercase hex form of a 32-byte value.
pub(crate) fn felt_hex(value: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(value))
}

/// Lowercase hex encoding with no separator.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_FELT: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_zero_address() {
        let result = validate_legacy("0x0");
        assert!(result.is_valid);
        assert_eq!(result.format, AddressFormat::Legacy);
        assert_eq!(result.felt252(), Some(ZERO_FELT));
    }

    #[test]
    fn test_empty_after_prefix() {
        let result = validate_legacy("0x");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Address cannot be empty after 0x")
        );
    }

    #[test]
    fn test_invalid_hex_characters() {
        let result = validate_legacy("0x12g4");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Invalid hex characters after 0x"));
        // Format still reflects what the detector assigned.
        assert_eq!(result.format, AddressFormat::Legacy);
    }

    #[test]
    fn test_too_long() {
        let long = format!("0x{}", "1".repeat(65));
        let result = validate_legacy(&long);
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Address too long: 65 hex digits (max 64)")
        );
    }

    #[test]
    fn test_felt_max_boundary() {
        // Exactly FELT_MAX passes.
        let max = format!("0x07{}", "f".repeat(62));
        let result = validate_legacy(&max);
        assert!(result.is_valid);
        assert_eq!(result.felt252(), Some(max.as_str()));

        // FELT_MAX + 1 = 2^251 fails.
        let over = format!("0x08{}", "0".repeat(62));
        let result = validate_legacy(&over);
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Value exceeds felt252 maximum (2^251 - 1)")
        );

        // 2^256 - 1 fails.
        let all_f = format!("0x{}", "f".repeat(64));
        assert!(!validate_legacy(&all_f).is_valid);
    }

    #[test]
    fn test_canonical_form_lowercases_and_pads() {
        let result = validate_legacy("0xABC");
        assert!(result.is_valid);
        let felt = result.felt252().unwrap();
        assert_eq!(felt.len(), 2 + 64);
        assert!(felt.ends_with("abc"));
        assert!(felt.starts_with("0x000"));
    }

    #[test]
    fn test_missing_prefix_direct_call() {
        let result = validate_legacy("deadbeef");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Legacy address must start with 0x")
        );
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_exceeds_felt_max() {
        assert!(!exceeds_felt_max(&[0u8; 32]));
        assert!(!exceeds_felt_max(&crate::FELT_MAX_BYTES));

        let mut over = [0u8; 32];
        over[0] = 0x08;
        assert!(exceeds_felt_max(&over));
        assert!(exceeds_felt_max(&[0xff; 32]));
    }
}
