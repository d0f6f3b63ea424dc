//! Device secret keys.
//!
//! Each device is provisioned with a 16-byte key shared with the token
//! server. Keys usually travel as 32-character hex strings.

use crate::error::{TokenError, TokenResult};
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a device key in bytes (128 bits, the SipHash key size).
pub const KEY_SIZE: usize = 16;

/// A device secret key, zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; KEY_SIZE],
}

impl SecretKey {
    /// Creates a key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates a key from a slice, which must be exactly [`KEY_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeyLength`] for any other length. Short
    /// keys are never padded and long keys are never truncated.
    pub fn from_slice(bytes: &[u8]) -> TokenResult<Self> {
        let array: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| TokenError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes: array })
    }

    /// Decodes a key from its hex representation (surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeyHex`] if the string is not valid hex,
    /// or [`TokenError::InvalidKeyLength`] if it does not decode to 16 bytes.
    pub fn from_hex(key_hex: &str) -> TokenResult<Self> {
        let mut decoded =
            hex::decode(key_hex.trim()).map_err(|e| TokenError::InvalidKeyHex(e.to_string()))?;
        let key = Self::from_slice(&decoded);
        decoded.zeroize();
        key
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl FromStr for SecretKey {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
