//! Shared types and request handling for the OpenPAYGO token tool.

use anyhow::{Context, Result};
use clap::Subcommand;
use openpaygo_token::{GeneratorConfig, TokenGenerator, TokenResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Token requests accepted on the command line.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a token that takes the device out of pay-as-you-go mode
    Unlock {
        /// Device starting code
        #[arg(long)]
        starting_code: u64,
        /// Device secret key (32 hex characters)
        #[arg(long)]
        key: String,
        /// Last counter value the device accepted
        #[arg(long)]
        counter: u64,
    },
    /// Generate a token that sets or adds days of credit
    Days {
        /// Device starting code (at least 5 digits)
        #[arg(long)]
        starting_code: u64,
        /// Device secret key (32 hex characters)
        #[arg(long)]
        key: String,
        /// Days to activate (0-995)
        #[arg(long)]
        days: u32,
        /// Last counter value the device accepted
        #[arg(long)]
        counter: u64,
        /// `set_time` or `add_time`
        #[arg(long, default_value = "add_time")]
        mode: String,
    },
    /// Generate a token that resynchronizes the device counter
    Sync {
        /// Device starting code (at least 5 digits)
        #[arg(long)]
        starting_code: u64,
        /// Device secret key (32 hex characters)
        #[arg(long)]
        key: String,
        /// Last counter value the device accepted
        #[arg(long)]
        counter: u64,
    },
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON response.
    #[serde(default)]
    pub pretty: bool,
}

/// Tool configuration parsed from a TOML file.
///
/// ```toml
/// [generator]
/// format = "standard"
///
/// [output]
/// pretty = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Loads config from `path`, or defaults when no path is given or the file
/// does not exist.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    if !path.exists() {
        info!("No config file found at {:?}, using defaults", path);
        return Ok(CliConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Runs a token request against a generator built from `config`.
pub fn run(command: &Command, config: &CliConfig) -> Result<TokenResponse> {
    let generator = TokenGenerator::new(config.generator.clone());
    let response = match command {
        Command::Unlock {
            starting_code,
            key,
            counter,
        } => generator
            .unlock(*starting_code, key, *counter)
            .context("Failed to generate unlock token")?,
        Command::Days {
            starting_code,
            key,
            days,
            counter,
            mode,
        } => generator
            .day_token(*starting_code, key, *days, *counter, mode)
            .context("Failed to generate day token")?,
        Command::Sync {
            starting_code,
            key,
            counter,
        } => generator
            .counter_sync(*starting_code, key, *counter)
            .context("Failed to generate counter sync token")?,
    };
    Ok(response)
}

/// Renders a response as JSON.
pub fn render(response: &TokenResponse, output: &OutputConfig) -> Result<String> {
    let json = if output.pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(json)
}
