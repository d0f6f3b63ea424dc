//! Error types for token generation.

use crate::format::TokenFormat;
use thiserror::Error;

/// Token generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Requested activation exceeds the largest encodable day count.
    #[error("too many days to activate: {0} (max 995)")]
    TooManyDaysToActivate(u32),

    /// Starting code or device key was not supplied.
    #[error("device info missing: {0}")]
    DeviceInfoMissing(String),

    /// Mode string is not one of `set_time` or `add_time`.
    #[error("no mode found for {0:?}")]
    NoModeFound(String),

    /// A payload or base does not fit in the three-digit base window.
    #[error("invalid value: {0} does not fit in the token base window")]
    InvalidValue(u64),

    /// Starting code is too large to carry a base window.
    #[error("starting code out of range: {0}")]
    CodeOutOfRange(u64),

    /// Device counter cannot advance without overflowing.
    #[error("counter overflow: {0} cannot advance")]
    CounterOverflow(u64),

    /// Device key is not valid hexadecimal.
    #[error("invalid key hex: {0}")]
    InvalidKeyHex(String),

    /// Device key decoded to the wrong number of bytes.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Token format is recognized but not produced by this generator.
    #[error("unsupported token format: {0}")]
    UnsupportedFormat(TokenFormat),
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
