//! Siddur CLI
//!
//! Command-line interface for classifying dates and assembling services

use clap::{Parser, Subcommand};
use siddur_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "siddur")]
#[command(about = "Siddur - Prayer service assembly by date", long_about = None)]
struct Cli {
    /// Emit JSON logs on stderr instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the liturgical conditions of a date
    Classify(commands::classify::ClassifyArgs),
    /// Assemble the chunk plan for one service
    Plan(commands::plan::PlanArgs),
    /// Print the service to play when the date is Sabbath or Yom Tov
    ShouldPlay(commands::should_play::ShouldPlayArgs),
}

fn main() {
    let cli = Cli::parse();

    init(Profile::for_json_flag(cli.json_logs));

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Plan(args) => commands::plan::execute(args),
        Commands::ShouldPlay(args) => commands::should_play::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
