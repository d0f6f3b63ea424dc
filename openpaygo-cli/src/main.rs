//! OpenPAYGO token tool
//!
//! Generates activation tokens for pay-as-you-go devices from the device's
//! starting code, secret key and last accepted counter. Prints the response
//! as JSON on stdout; logs go to stderr.
//!
//! Usage:
//!   openpaygo-token days --starting-code 123456789 --key <hex> --days 30 --counter 0 --mode set_time
//!
//! The tool is stateless: tracking the device counter is up to the caller.

use anyhow::Result;
use clap::Parser;
use openpaygo_cli::{load_config, render, run, Command};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "openpaygo-token")]
#[command(about = "Generate OpenPAYGO activation tokens")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = load_config(args.config.as_deref())?;
    debug!(format = %config.generator.format, "token generator configured");

    let response = run(&args.command, &config)?;
    println!("{}", render(&response, &config.output)?);
    Ok(())
}
