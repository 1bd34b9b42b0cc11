//! Top-level validation entry point and flat-payload validators.

use crate::codec;
use crate::detection::detect_format;
use crate::error::AddressError;
use crate::legacy;
use crate::types::{AddressFormat, ParsedData, ValidationResult};
use crate::unified;

/// Validate an address string in any supported format.
///
/// Detects the format from the prefix, dispatches to the matching
/// validator, and reports every failure as data: this function never
/// panics on untrusted input and holds no state, so concurrent calls
/// are safe.
pub fn validate_address(input: &str) -> ValidationResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(
            AddressFormat::Unknown,
            AddressError::EmptyInput.to_string(),
        );
    }

    match detect_format(trimmed) {
        AddressFormat::Legacy => legacy::validate_legacy(trimmed),
        AddressFormat::Public => validate_bech32(trimmed, AddressFormat::Public, crate::HRP_PUBLIC),
        AddressFormat::Shielded => {
            validate_bech32(trimmed, AddressFormat::Shielded, crate::HRP_SHIELDED)
        }
        AddressFormat::Unified => {
            validate_bech32(trimmed, AddressFormat::Unified, crate::HRP_UNIFIED)
        }
        AddressFormat::Unknown => ValidationResult::invalid(
            AddressFormat::Unknown,
            AddressError::UnknownFormat.to_string(),
        ),
    }
}

/// Decode the Bech32m layer, then hand off to the format's validator.
///
/// Decode failures keep the detector's format tag; they are never demoted
/// to [`AddressFormat::Unknown`].
fn validate_bech32(input: &str, format: AddressFormat, hrp: &str) -> ValidationResult {
    let decoded = match codec::decode(input, hrp) {
        Ok(decoded) => decoded,
        Err(e) => return ValidationResult::invalid(format, e.to_string()),
    };

    match format {
        AddressFormat::Unified => {
            unified::validate_unified(&decoded.hrp, decoded.version, &decoded.data)
        }
        _ => validate_simple(format, &decoded.hrp, decoded.version, &decoded.data),
    }
}

/// Validate the flat 32-byte payload carried by public and shielded
/// addresses.
pub fn validate_simple(
    format: AddressFormat,
    hrp: &str,
    version: u8,
    data: &[u8],
) -> ValidationResult {
    match check_simple(version, data) {
        Ok(felt252) => ValidationResult::valid(
            format,
            ParsedData {
                hrp: Some(hrp.to_string()),
                version: Some(version),
                payload: Some(data.to_vec()),
                felt252: Some(felt252),
                ..Default::default()
            },
        ),
        Err(e) => ValidationResult::invalid(format, e.to_string()),
    }
}

fn check_simple(version: u8, data: &[u8]) -> Result<String, AddressError> {
    if version != crate::ADDRESS_VERSION {
        return Err(AddressError::UnsupportedVersion(version));
    }

    let value: [u8; 32] = data
        .try_into()
        .map_err(|_| AddressError::InvalidDataLength {
            expected: 32,
            actual: data.len(),
        })?;

    if legacy::exceeds_felt_max(&value) {
        return Err(AddressError::ExceedsFeltMax);
    }

    Ok(legacy::felt_hex(&value))
}
