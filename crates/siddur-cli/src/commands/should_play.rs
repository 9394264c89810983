//! Should-play command
//!
//! Usage: siddur should-play --date <YYYY-MM-DD> --hour <0-23> [--config <FILE>]
//!
//! Prints the service name on Sabbath or Yom Tov and nothing otherwise.

use clap::Args;
use siddur_engine::{EngineCommand, EngineCommandResult};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShouldPlayArgs {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Local hour (0-23) selecting the service
    #[arg(long)]
    pub hour: u32,

    /// Classifier configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute should-play command
pub fn execute(args: ShouldPlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = super::parse_date(&args.date)?;
    let builder = super::load_builder(args.config.as_deref(), None)?;

    let cmd = EngineCommand::ShouldPlay {
        date,
        hour: args.hour,
    };
    if let EngineCommandResult::ShouldPlay(Some(service)) = super::run_transient(&builder, cmd)? {
        println!("{}", service);
    }
    Ok(())
}
