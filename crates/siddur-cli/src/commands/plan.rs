//! Plan command
//!
//! Usage: siddur plan --date <YYYY-MM-DD> --service <SERVICE>
//!        [--config <FILE>] [--catalog <FILE>] [--directory <FILE>] [--text]

use clap::Args;
use siddur_core::{ChunkCatalog, ServiceType};
use siddur_engine::{BuildOutcome, EngineCommand, EngineCommandResult, TefillaBuilder};
use siddur_store::FsPlanDirectory;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// shacharis, mincha or maariv
    #[arg(long)]
    pub service: String,

    /// Classifier configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chunk catalog (YAML) to validate the plan against
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Plan directory (JSON); plans are reused and stored here
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Print chunk texts from the catalog instead of JSON
    #[arg(long, requires = "catalog")]
    pub text: bool,
}

/// Execute plan command
pub fn execute(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = super::parse_date(&args.date)?;
    let service: ServiceType = args
        .service
        .parse()
        .map_err(|e| siddur_core::ExError::from(e).with_op("parse_service"))?;
    let builder = super::load_builder(args.config.as_deref(), args.catalog.as_deref())?;

    let cmd = EngineCommand::BuildPlan { date, service };
    let result = match &args.directory {
        Some(path) => {
            let mut directory = FsPlanDirectory::open(path)?;
            super::run(&builder, cmd, &mut directory)?
        }
        None => super::run_transient(&builder, cmd)?,
    };

    if let EngineCommandResult::Built(outcome) = result {
        if args.text {
            print_text(&builder, &outcome);
        } else {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

fn print_text(builder: &TefillaBuilder, outcome: &BuildOutcome) {
    let Some(catalog) = builder.catalog() else {
        return;
    };
    for chunk in outcome.plan.iter() {
        match catalog.text_of(chunk) {
            Some(text) => println!("{}\n", text.trim_end()),
            None => println!("[missing: {}]\n", chunk),
        }
    }
}
