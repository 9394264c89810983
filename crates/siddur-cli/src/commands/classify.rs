//! Classify command
//!
//! Usage: siddur classify --date <YYYY-MM-DD> [--config <FILE>]

use clap::Args;
use siddur_engine::{EngineCommand, EngineCommandResult};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Classifier configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute classify command
pub fn execute(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = super::parse_date(&args.date)?;
    let builder = super::load_builder(args.config.as_deref(), None)?;

    if let EngineCommandResult::Classified(ctx) =
        super::run_transient(&builder, EngineCommand::Classify { date })?
    {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    }
    Ok(())
}
