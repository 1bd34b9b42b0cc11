//! Unified address validation: TLV receiver-list parsing.

use crate::error::AddressError;
use crate::types::{AddressFormat, ParsedData, Receiver, ValidationResult};

/// Value length required for the known receiver types.
const KNOWN_RECEIVER_LEN: usize = 32;

/// Validate the TLV-bearing payload of a unified address.
///
/// The payload is a sequence of `[type:1][length:1][value:length]`
/// records. Records with unknown typecodes are accepted at any length
/// and labelled, not rejected; a payload with zero records is invalid
/// even though parsing succeeded.
pub fn validate_unified(hrp: &str, version: u8, data: &[u8]) -> ValidationResult {
    match check_unified(version, data) {
        Ok(receivers) => ValidationResult::valid(
            AddressFormat::Unified,
            ParsedData {
                hrp: Some(hrp.to_string()),
                version: Some(version),
                payload: Some(data.to_vec()),
                receivers: Some(receivers),
                ..Default::default()
            },
        ),
        Err(e) => ValidationResult::invalid(AddressFormat::Unified, e.to_string()),
    }
}

fn check_unified(version: u8, data: &[u8]) -> Result<Vec<Receiver>, AddressError> {
    if version != crate::ADDRESS_VERSION {
        return Err(AddressError::UnsupportedVersion(version));
    }

    let receivers = parse_receivers(data)?;
    if receivers.is_empty() {
        return Err(AddressError::NoReceivers);
    }

    Ok(receivers)
}

/// Parse a sequence of TLV records, preserving wire order.
pub fn parse_receivers(data: &[u8]) -> Result<Vec<Receiver>, AddressError> {
    let mut receivers = Vec::new();
    let mut cursor = 0;

    while cursor < data.len() {
        // Record header: 1 type byte + 1 length byte.
        if data.len() - cursor < 2 {
            return Err(AddressError::IncompleteTlvRecord);
        }
        let typecode = data[cursor];
        let length = data[cursor + 1] as usize;
        cursor += 2;

        let remaining = data.len() - cursor;
        if length > remaining {
            return Err(AddressError::TlvLengthOverflow {
                declared: length,
                remaining,
            });
        }

        // Known receiver types carry exactly 32 value bytes. Any other
        // typecode is accepted at whatever length it declares.
        if (typecode == crate::RECEIVER_PUBLIC_KEY || typecode == crate::RECEIVER_SHIELDED)
            && length != KNOWN_RECEIVER_LEN
        {
            return Err(AddressError::InvalidReceiverLength {
                typecode,
                actual: length,
            });
        }

        let value = data[cursor..cursor + length].to_vec();
        cursor += length;

        receivers.push(Receiver::new(typecode, value));
    }

    Ok(receivers)
}
