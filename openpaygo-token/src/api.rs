//! Request-level token operations.
//!
//! These take the device key as hex, validate the request, and return a
//! serializable [`TokenResponse`]. Validation runs in a fixed order: day
//! limit, device info, key decoding, then mode.

use crate::codec::{COUNTER_SYNC_VALUE, MAX_ACTIVATION_VALUE, MIN_STARTING_CODE, PAYG_DISABLE_VALUE};
use crate::error::{TokenError, TokenResult};
use crate::generator::TokenGenerator;
use crate::key::SecretKey;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Response returned by every token operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Human-readable summary of what the token does.
    pub message: String,
    /// The token to enter on the device.
    pub token: u64,
    /// The device counter once the token is accepted.
    pub count: u64,
}

/// Generates a token that takes the device out of pay-as-you-go mode.
///
/// # Errors
///
/// Returns an error if `key_hex` is not a valid 16-byte hex key.
pub fn unlock(starting_code: u64, key_hex: &str, counter: u64) -> TokenResult<TokenResponse> {
    TokenGenerator::default().unlock(starting_code, key_hex, counter)
}

/// Generates a token that sets or adds `days` of credit.
///
/// # Errors
///
/// Returns [`TokenError::TooManyDaysToActivate`] above 995 days,
/// [`TokenError::DeviceInfoMissing`] for a starting code under five digits or
/// an empty key, a key error for malformed hex, and
/// [`TokenError::NoModeFound`] for a mode other than `set_time`/`add_time`.
pub fn day_token(
    starting_code: u64,
    key_hex: &str,
    days: u32,
    counter: u64,
    mode: &str,
) -> TokenResult<TokenResponse> {
    TokenGenerator::default().day_token(starting_code, key_hex, days, counter, mode)
}

/// Generates a token that makes the device resynchronize its counter.
///
/// # Errors
///
/// Returns [`TokenError::DeviceInfoMissing`] or a key error, as
/// [`day_token`] does.
pub fn counter_sync(starting_code: u64, key_hex: &str, counter: u64) -> TokenResult<TokenResponse> {
    TokenGenerator::default().counter_sync(starting_code, key_hex, counter)
}

impl TokenGenerator {
    /// See [`unlock`].
    pub fn unlock(
        &self,
        starting_code: u64,
        key_hex: &str,
        counter: u64,
    ) -> TokenResult<TokenResponse> {
        let key = SecretKey::from_hex(key_hex)?;
        let generated = self.generate(
            starting_code,
            &key,
            PAYG_DISABLE_VALUE,
            counter,
            Mode::Disable,
        )?;
        info!(count = generated.count, "generated unlock token");

        Ok(TokenResponse {
            message: "disable pay-as-you-go".to_string(),
            token: generated.token,
            count: generated.count,
        })
    }

    /// See [`day_token`].
    pub fn day_token(
        &self,
        starting_code: u64,
        key_hex: &str,
        days: u32,
        counter: u64,
        mode: &str,
    ) -> TokenResult<TokenResponse> {
        if days > MAX_ACTIVATION_VALUE {
            warn!(days, "rejected day token request");
            return Err(TokenError::TooManyDaysToActivate(days));
        }
        check_device_info(starting_code, key_hex)?;
        let key = SecretKey::from_hex(key_hex)?;
        let mode: Mode = mode.parse()?;

        let generated = self.generate(starting_code, &key, days, counter, mode)?;
        info!(%mode, days, count = generated.count, "generated day token");

        let verb = match mode {
            Mode::SetTime => "set",
            Mode::AddTime | Mode::Disable => "add",
        };
        Ok(TokenResponse {
            message: format!("{verb} {days} days"),
            token: generated.token,
            count: generated.count,
        })
    }

    /// See [`counter_sync`].
    pub fn counter_sync(
        &self,
        starting_code: u64,
        key_hex: &str,
        counter: u64,
    ) -> TokenResult<TokenResponse> {
        check_device_info(starting_code, key_hex)?;
        let key = SecretKey::from_hex(key_hex)?;

        let generated = self.generate(
            starting_code,
            &key,
            COUNTER_SYNC_VALUE,
            counter,
            Mode::AddTime,
        )?;
        info!(count = generated.count, "generated counter sync token");

        Ok(TokenResponse {
            message: "resync counter".to_string(),
            token: generated.token,
            count: generated.count,
        })
    }
}

fn check_device_info(starting_code: u64, key_hex: &str) -> TokenResult<()> {
    if starting_code < MIN_STARTING_CODE {
        warn!(starting_code, "starting code too short");
        return Err(TokenError::DeviceInfoMissing(
            "starting code must have at least 5 digits".to_string(),
        ));
    }
    if key_hex.trim().is_empty() {
        warn!("device key missing");
        return Err(TokenError::DeviceInfoMissing("device key is empty".to_string()));
    }
    Ok(())
}
