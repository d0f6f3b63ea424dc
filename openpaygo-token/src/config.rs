//! Generator configuration.

use crate::format::TokenFormat;
use serde::{Deserialize, Serialize};

/// Settings for a [`crate::TokenGenerator`], loadable from TOML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output format for generated tokens.
    #[serde(default)]
    pub format: TokenFormat,
}
