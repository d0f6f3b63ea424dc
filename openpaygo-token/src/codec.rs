//! Base window codec.
//!
//! The low three decimal digits of a code form its base. A payload is added
//! to the base modulo 1000, so the device can recover it by subtracting the
//! starting code's base from the token's base.

use crate::error::{TokenError, TokenResult};

/// Largest value the base window can hold.
pub const MAX_BASE: u64 = 999;

/// Modulus separating the base window from the chain digits.
pub const TOKEN_VALUE_OFFSET: u64 = 1000;

/// Largest number of days a single token can activate.
pub const MAX_ACTIVATION_VALUE: u32 = 995;

/// Payload signalling the device to leave pay-as-you-go mode.
pub const PAYG_DISABLE_VALUE: u32 = 998;

/// Payload signalling the device to resynchronize its counter.
pub const COUNTER_SYNC_VALUE: u32 = 999;

/// Smallest starting code with the five digits a device code requires.
pub const MIN_STARTING_CODE: u64 = 10_000;

/// Returns the base window (`code mod 1000`).
#[must_use]
pub fn extract_base(code: u64) -> u64 {
    code % TOKEN_VALUE_OFFSET
}

/// Adds `value` to `base` modulo 1000.
///
/// Both inputs are expected to be in `[0, 999]`; the result always is.
#[must_use]
pub fn encode_base(base: u64, value: u64) -> u64 {
    let sum = base + value;
    if sum > MAX_BASE {
        sum - TOKEN_VALUE_OFFSET
    } else {
        sum
    }
}

/// Replaces the base window of `code` with `base`, leaving higher digits alone.
///
/// # Errors
///
/// Returns [`TokenError::InvalidValue`] if `base` exceeds [`MAX_BASE`], or
/// [`TokenError::CodeOutOfRange`] if the result does not fit in a `u64`.
pub fn inject_base(code: u64, base: u64) -> TokenResult<u64> {
    if base > MAX_BASE {
        return Err(TokenError::InvalidValue(base));
    }
    (code - extract_base(code))
        .checked_add(base)
        .ok_or(TokenError::CodeOutOfRange(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_wraps_past_999() {
        assert_eq!(encode_base(789, 30), 819);
        assert_eq!(encode_base(789, 211), 0);
        assert_eq!(encode_base(999, 999), 998);
    }

    #[test]
    fn inject_keeps_high_digits() {
        assert_eq!(inject_base(123_456_789, 819).unwrap(), 123_456_819);
        assert_eq!(inject_base(42, 7).unwrap(), 7);
    }

    #[test]
    fn inject_rejects_wide_base() {
        assert_eq!(inject_base(123_456, 1000), Err(TokenError::InvalidValue(1000)));
    }

    #[test]
    fn inject_near_u64_max() {
        // u64::MAX ends in 615
        assert_eq!(inject_base(u64::MAX, 615).unwrap(), u64::MAX);
        assert_eq!(inject_base(u64::MAX, 100).unwrap(), u64::MAX - 515);
        assert_eq!(
            inject_base(u64::MAX, 616),
            Err(TokenError::CodeOutOfRange(u64::MAX))
        );
    }
}
