//! Error types for address validation.

use thiserror::Error;

/// Errors that can occur while validating or encoding an address.
///
/// Display strings are part of the observable contract: every failure a
/// validator reports surfaces one of these messages verbatim in
/// [`ValidationResult::error`](crate::ValidationResult).
#[derive(Debug, Error)]
pub enum AddressError {
    /// The input string was empty (after trimming).
    #[error("input must be a non-empty string")]
    EmptyInput,

    /// The input did not match any supported prefix.
    #[error("Unknown address format: expected a 0x, strk1, strkx1, or strku1 prefix")]
    UnknownFormat,

    /// A legacy address was passed without its `0x` prefix.
    #[error("Legacy address must start with 0x")]
    MissingHexPrefix,

    /// A legacy address had no digits after the `0x` prefix.
    #[error("Address cannot be empty after 0x")]
    EmptyHexDigits,

    /// A legacy address contained non-hexadecimal characters.
    #[error("Invalid hex characters after 0x")]
    InvalidHexDigits,

    /// A legacy address carried more than 64 hex digits.
    #[error("Address too long: {actual} hex digits (max 64)")]
    HexTooLong { actual: usize },

    /// A value exceeded the field-element bound. Never clamped or wrapped.
    #[error("Value exceeds felt252 maximum (2^251 - 1)")]
    ExceedsFeltMax,

    /// The Bech32m collaborator rejected the string; reason surfaced verbatim.
    #[error("Bech32 decode error: {0}")]
    Bech32(String),

    /// Encoding through the Bech32m collaborator failed.
    #[error("Bech32 encode error: {0}")]
    Bech32Encode(String),

    /// The decoded HRP did not match the one the detected format requires.
    #[error("Wrong address prefix: expected {expected}, got {actual}")]
    HrpMismatch { expected: String, actual: String },

    /// The decoded payload had no bytes at all.
    #[error("Decoded payload is empty: missing version byte")]
    MissingVersionByte,

    /// The version byte was not the supported version.
    #[error("Unsupported version: {0} (expected 1)")]
    UnsupportedVersion(u8),

    /// A flat payload was not exactly the required length.
    #[error("Invalid data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Fewer than two bytes remained where a TLV record header was expected.
    #[error("Incomplete TLV record: missing type or length")]
    IncompleteTlvRecord,

    /// A TLV record declared more value bytes than the payload holds.
    #[error("TLV record declares {declared} value bytes but only {remaining} remain")]
    TlvLengthOverflow { declared: usize, remaining: usize },

    /// A known receiver type carried the wrong value length.
    #[error("Receiver type {typecode} requires 32 bytes of data, got {actual}")]
    InvalidReceiverLength { typecode: u8, actual: usize },

    /// A unified address parsed cleanly but contained no receivers.
    #[error("Unified address must contain at least one receiver")]
    NoReceivers,
}
