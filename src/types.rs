//! Core value types for address validation results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address format tag, derived purely from the textual prefix.
///
/// Detection never mutates the tag afterwards: a result tagged
/// [`AddressFormat::Unified`] that failed validation still reports
/// `Unified`, so callers can distinguish "looked like a unified address
/// but failed structurally" from "unrecognized input".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// Legacy fixed-width hexadecimal (`0x…`).
    Legacy,
    /// Public Bech32m address (`strk1…`).
    Public,
    /// Shielded Bech32m address (`strkx1…`).
    Shielded,
    /// Unified Bech32m address carrying TLV receivers (`strku1…`).
    Unified,
    /// No supported prefix matched.
    Unknown,
}

impl AddressFormat {
    /// Lowercase tag name for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFormat::Legacy => "legacy",
            AddressFormat::Public => "public",
            AddressFormat::Shielded => "shielded",
            AddressFormat::Unified => "unified",
            AddressFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One TLV record inside a unified address.
///
/// A receiver represents one alternative destination a sender may choose.
/// The order of receivers within a payload is part of the address's
/// on-wire identity and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    /// TLV typecode.
    pub typecode: u8,
    /// Raw value bytes, a faithful slice of the decoded payload.
    pub data: Vec<u8>,
    /// Human-readable label for the typecode.
    pub description: Option<String>,
}

impl Receiver {
    /// Create a receiver, labelling it from its typecode.
    pub fn new(typecode: u8, data: Vec<u8>) -> Self {
        Self {
            typecode,
            data,
            description: Some(describe_typecode(typecode)),
        }
    }

    /// Whether the typecode is one of the known receiver types.
    pub fn is_known(&self) -> bool {
        matches!(
            self.typecode,
            crate::RECEIVER_PUBLIC_KEY | crate::RECEIVER_SHIELDED
        )
    }
}

/// Human-readable label for a receiver typecode.
///
/// Unrecognized typecodes are labelled rather than rejected; forward
/// compatibility with future receiver types is deliberate.
pub fn describe_typecode(typecode: u8) -> String {
    match typecode {
        crate::RECEIVER_PUBLIC_KEY => "Public key receiver".to_string(),
        crate::RECEIVER_SHIELDED => "Shielded receiver".to_string(),
        other => format!("unknown receiver type {}", other),
    }
}

/// Structured fields recovered from a successfully validated address.
///
/// Which fields are populated depends on the format: legacy addresses set
/// only `felt252`; public and shielded addresses set `hrp`, `version`,
/// `payload`, and `felt252`; unified addresses set `hrp`, `version`,
/// `payload`, and `receivers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedData {
    /// Human-readable prefix of the Bech32m encoding.
    pub hrp: Option<String>,
    /// Version byte stripped from the front of the decoded payload.
    pub version: Option<u8>,
    /// Decoded payload after removing the version byte.
    pub payload: Option<Vec<u8>>,
    /// Ordered receiver list (unified addresses only).
    pub receivers: Option<Vec<Receiver>>,
    /// Canonical `0x`-prefixed 64-hex-digit field element.
    pub felt252: Option<String>,
}

/// Result of address validation, returned by every validator.
///
/// `error` is set iff `is_valid` is false; `parsed` is set iff it is true.
/// `format` always reflects what the detector assigned, even on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the address passed every check for its format.
    pub is_valid: bool,
    /// Format the detector assigned from the prefix.
    pub format: AddressFormat,
    /// Human-readable failure description.
    pub error: Option<String>,
    /// Structured fields recovered on success.
    pub parsed: Option<ParsedData>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid(format: AddressFormat, parsed: ParsedData) -> Self {
        Self {
            is_valid: true,
            format,
            error: None,
            parsed: Some(parsed),
        }
    }

    /// Create an invalid result with an error message.
    pub fn invalid(format: AddressFormat, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            format,
            error: Some(error.into()),
            parsed: None,
        }
    }

    /// Canonical felt252 string, if this result carries one.
    pub fn felt252(&self) -> Option<&str> {
        self.parsed.as_ref()?.felt252.as_deref()
    }

    /// Parsed receiver list, if this result carries one.
    pub fn receivers(&self) -> Option<&[Receiver]> {
        self.parsed.as_ref()?.receivers.as_deref()
    }
}
