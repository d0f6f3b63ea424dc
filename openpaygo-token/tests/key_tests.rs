mod common;

use common::DEVICE_KEY_HEX;
use openpaygo_token::{SecretKey, TokenError, KEY_SIZE};
use std::str::FromStr;

#[test]
fn from_hex_decodes_bytes() {
    let key = SecretKey::from_hex(DEVICE_KEY_HEX).unwrap();
    assert_eq!(key.as_bytes()[0], 0xa2);
    assert_eq!(key.as_bytes()[15], 0xb1);
}

#[test]
fn from_hex_accepts_uppercase_and_whitespace() {
    let upper = SecretKey::from_hex(&format!("  {}\n", DEVICE_KEY_HEX.to_uppercase())).unwrap();
    let lower = SecretKey::from_hex(DEVICE_KEY_HEX).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn from_hex_rejects_odd_length() {
    let result = SecretKey::from_hex("abc");
    assert!(matches!(result, Err(TokenError::InvalidKeyHex(_))));
}

#[test]
fn from_hex_rejects_non_hex() {
    let result = SecretKey::from_hex("g29ab82edc5fbbc41ec9530f6dac86b1");
    assert!(matches!(result, Err(TokenError::InvalidKeyHex(_))));
}

#[test]
fn from_slice_checks_length() {
    assert!(SecretKey::from_slice(&[7u8; KEY_SIZE]).is_ok());
    assert_eq!(
        SecretKey::from_slice(&[7u8; 15]),
        Err(TokenError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: 15,
        })
    );
    assert_eq!(
        SecretKey::from_slice(&[7u8; 32]),
        Err(TokenError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: 32,
        })
    );
}

#[test]
fn from_str_matches_from_hex() {
    let parsed = SecretKey::from_str(DEVICE_KEY_HEX).unwrap();
    assert_eq!(parsed, SecretKey::from_hex(DEVICE_KEY_HEX).unwrap());
}

#[test]
fn debug_is_redacted() {
    let key = SecretKey::from_hex(DEVICE_KEY_HEX).unwrap();
    let debug = format!("{key:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("a2"));
    assert!(!debug.contains("162"));
}
