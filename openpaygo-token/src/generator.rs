//! Token assembly.
//!
//! A token is built by injecting the payload base into the starting code,
//! walking the hash chain from there up to the device's next count, and
//! injecting the base again, since chaining scrambles the low digits.

use crate::chain::hop_chain;
use crate::codec::{encode_base, extract_base, inject_base, MAX_BASE};
use crate::config::GeneratorConfig;
use crate::error::{TokenError, TokenResult};
use crate::key::SecretKey;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A generated token together with the device count it moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedToken {
    /// The token to enter on the device.
    pub token: u64,
    /// The device counter once the token is accepted.
    pub count: u64,
}

/// Generates a standard token.
///
/// `value` is the payload carried in the base window: days (`0..=995`),
/// [`crate::PAYG_DISABLE_VALUE`] or [`crate::COUNTER_SYNC_VALUE`]. The chain
/// is walked `counter + hops` steps from the starting code, the same number
/// the device walks to reach its next count.
///
/// # Errors
///
/// Returns [`TokenError::InvalidValue`] if `value` is above 999,
/// [`TokenError::CodeOutOfRange`] for a starting code too close to
/// `u64::MAX`, or [`TokenError::CounterOverflow`] if the counter cannot
/// advance.
pub fn generate_token(
    starting_code: u64,
    key: &SecretKey,
    value: u32,
    counter: u64,
    mode: Mode,
) -> TokenResult<u64> {
    assemble(starting_code, key, value, counter, mode).map(|generated| generated.token)
}

fn assemble(
    starting_code: u64,
    key: &SecretKey,
    value: u32,
    counter: u64,
    mode: Mode,
) -> TokenResult<GeneratedToken> {
    if u64::from(value) > MAX_BASE {
        return Err(TokenError::InvalidValue(u64::from(value)));
    }
    let token_base = encode_base(extract_base(starting_code), u64::from(value));
    let seed = inject_base(starting_code, token_base)?;

    let count = mode.next_count(counter)?;
    debug!(%mode, counter, count, "walking token chain");

    let chained = hop_chain(seed, key, count);
    let token = inject_base(chained, token_base)?;

    Ok(GeneratedToken { token, count })
}

/// Generates tokens according to a [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator {
    config: GeneratorConfig,
}

impl TokenGenerator {
    /// Creates a generator with explicit config.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a token and the count the device will hold after it.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedFormat`] if the configured format
    /// cannot be produced, or any error [`generate_token`] returns.
    pub fn generate(
        &self,
        starting_code: u64,
        key: &SecretKey,
        value: u32,
        counter: u64,
        mode: Mode,
    ) -> TokenResult<GeneratedToken> {
        self.config.format.ensure_supported()?;
        assemble(starting_code, key, value, counter, mode)
    }
}
