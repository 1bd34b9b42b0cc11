//! Bech32m codec boundary.
//!
//! Thin wrapper around the `bech32` crate: checksum and character-set
//! rules live entirely in that crate. This module only splits the version
//! byte off the decoded payload and maps codec failures into
//! [`AddressError`], so validators never touch checksum math.

use bech32::{Bech32m, Hrp};

use crate::error::AddressError;

/// Decoded wire form of a Bech32m address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Human-readable prefix as decoded from the string.
    pub hrp: String,
    /// First payload byte.
    pub version: u8,
    /// Payload after the version byte.
    pub data: Vec<u8>,
}

/// Decode a Bech32m string, requiring it to carry `expected_hrp`.
///
/// Checksum, character-set, and mixed-case failures are surfaced verbatim
/// from the codec as [`AddressError::Bech32`].
pub fn decode(input: &str, expected_hrp: &str) -> Result<Decoded, AddressError> {
    let (hrp, bytes) = bech32::decode(input).map_err(|e| AddressError::Bech32(e.to_string()))?;

    if hrp.as_str() != expected_hrp {
        return Err(AddressError::HrpMismatch {
            expected: expected_hrp.to_string(),
            actual: hrp.as_str().to_string(),
        });
    }

    let (version, data) = bytes
        .split_first()
        .ok_or(AddressError::MissingVersionByte)?;

    Ok(Decoded {
        hrp: hrp.as_str().to_string(),
        version: *version,
        data: data.to_vec(),
    })
}

/// Encode a version byte plus payload under `hrp` with a Bech32m checksum.
pub fn encode(hrp: &str, version: u8, data: &[u8]) -> Result<String, AddressError> {
    let hrp = Hrp::parse(hrp).map_err(|e| AddressError::Bech32Encode(e.to_string()))?;

    let mut payload = Vec::with_capacity(1 + data.len());
    payload.push(version);
    payload.extend_from_slice(data);

    bech32::encode::<Bech32m>(hrp, &payload).map_err(|e| AddressError::Bech32Encode(e.to_string()))
}
