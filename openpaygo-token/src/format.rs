//! Token output formats.

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the chain value is rendered as a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFormat {
    /// Plain decimal token of up to nine digits.
    #[default]
    Standard,
    /// Fifteen digits drawn from `1..=4`, one per 2-bit group of the
    /// 30-bit chain value, for keypads with four keys. Not produced.
    RestrictedDigitSet,
}

impl TokenFormat {
    /// Fails unless tokens of this format can be generated.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedFormat`] for
    /// [`TokenFormat::RestrictedDigitSet`].
    pub fn ensure_supported(self) -> TokenResult<()> {
        match self {
            Self::Standard => Ok(()),
            Self::RestrictedDigitSet => Err(TokenError::UnsupportedFormat(self)),
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::RestrictedDigitSet => f.write_str("restricted_digit_set"),
        }
    }
}
