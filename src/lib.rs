//! Starknet Address Validation Module
//!
//! This crate provides detection, validation, and structural parsing for
//! the four concurrent Starknet address encodings.
//!
//! # Overview
//!
//! Four formats are recognized by their textual prefix:
//! - **Legacy** (`0x…`): up to 64 hex digits, a field element below
//!   `FELT_MAX = 2^251 - 1`.
//! - **Public** (`strk1…`): Bech32m, version byte `1`, flat 32-byte value.
//! - **Shielded** (`strkx1…`): same layout under the shielded prefix.
//! - **Unified** (`strku1…`): Bech32m, version byte `1`, then a list of
//!   Type-Length-Value receiver records.
//!
//! # Payload layout
//!
//! ```text
//! public/shielded: [version:1][value:32]
//! unified:         [version:1]([type:1][length:1][value:length])+
//! ```
//!
//! # Example
//!
//! ```rust
//! use starknet_address::{validate_address, AddressFormat};
//!
//! let result = validate_address("0x0");
//! assert!(result.is_valid);
//! assert_eq!(result.format, AddressFormat::Legacy);
//!
//! let result = validate_address("not an address");
//! assert!(!result.is_valid);
//! assert_eq!(result.format, AddressFormat::Unknown);
//! ```
//!
//! Every failure is reported as data inside [`ValidationResult`]; nothing
//! escapes `validate_address` as an error value. The crate performs no
//! I/O and keeps no state between calls.

mod codec;
mod detection;
mod error;
mod legacy;
mod types;
mod unified;
mod validation;
mod vectors;

pub use detection::detect_format;
pub use error::AddressError;
pub use legacy::{bytes_to_hex, validate_legacy};
pub use types::{describe_typecode, AddressFormat, ParsedData, Receiver, ValidationResult};
pub use unified::{parse_receivers, validate_unified};
pub use validation::{validate_address, validate_simple};
pub use vectors::{generate_test_vector, generate_test_vector_with_rng};

/// Human-readable prefix for public addresses (`strk1…` on the wire).
pub const HRP_PUBLIC: &str = "strk";

/// Human-readable prefix for shielded addresses (`strkx1…` on the wire).
pub const HRP_SHIELDED: &str = "strkx";

/// Human-readable prefix for unified addresses (`strku1…` on the wire).
pub const HRP_UNIFIED: &str = "strku";

/// The single supported address version byte.
pub const ADDRESS_VERSION: u8 = 1;

/// TLV typecode for a public-key receiver.
pub const RECEIVER_PUBLIC_KEY: u8 = 0x00;

/// TLV typecode for a shielded receiver.
pub const RECEIVER_SHIELDED: u8 = 0x01;

/// `FELT_MAX = 2^251 - 1` as 32 big-endian bytes.
pub const FELT_MAX_BYTES: [u8; 32] = [
    0x07, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff,
];
