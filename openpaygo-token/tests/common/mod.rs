//! Shared test helpers for token tests.

#![allow(dead_code)]

use openpaygo_token::SecretKey;

/// Hex of the device key used by the fixed vectors below.
pub const DEVICE_KEY_HEX: &str = "a29ab82edc5fbbc41ec9530f6dac86b1";

/// Nine-digit starting code used across tests.
pub const STARTING_CODE: u64 = 123_456_789;

/// Returns the all-zero key.
pub fn zero_key() -> SecretKey {
    SecretKey::from_bytes([0u8; 16])
}

/// Returns the key encoded by [`DEVICE_KEY_HEX`].
pub fn device_key() -> SecretKey {
    SecretKey::from_hex(DEVICE_KEY_HEX).unwrap()
}
