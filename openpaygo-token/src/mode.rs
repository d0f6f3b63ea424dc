//! Token modes and the counter-parity hop table.

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a token tells the device to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Leave pay-as-you-go mode (unlock permanently).
    Disable,
    /// Replace the remaining credit with the payload.
    SetTime,
    /// Add the payload to the remaining credit.
    AddTime,
}

impl Mode {
    /// Returns the number of chain steps for a device at `counter`.
    ///
    /// | parity | SetTime | AddTime / Disable |
    /// |--------|---------|-------------------|
    /// | even   | 2       | 1                 |
    /// | odd    | 1       | 2                 |
    ///
    /// Set-Time tokens therefore always land on even counts and the other
    /// modes on odd counts.
    #[must_use]
    pub fn hops(self, counter: u64) -> u64 {
        let even = counter % 2 == 0;
        match (self, even) {
            (Self::SetTime, true) => 2,
            (Self::SetTime, false) => 1,
            (Self::AddTime | Self::Disable, true) => 1,
            (Self::AddTime | Self::Disable, false) => 2,
        }
    }

    /// Returns the device counter after it accepts a token of this mode.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::CounterOverflow`] if the count would not fit in
    /// a `u64`.
    pub fn next_count(self, counter: u64) -> TokenResult<u64> {
        counter
            .checked_add(self.hops(counter))
            .ok_or(TokenError::CounterOverflow(counter))
    }

    /// Returns the wire name of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::SetTime => "set_time",
            Self::AddTime => "add_time",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the day-token mode names. Matching is case-sensitive, and
/// `"disable"` is rejected: disabling goes through [`crate::unlock`].
impl FromStr for Mode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set_time" => Ok(Self::SetTime),
            "add_time" => Ok(Self::AddTime),
            other => Err(TokenError::NoModeFound(other.to_string())),
        }
    }
}
