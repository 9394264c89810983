pub mod classify;
pub mod plan;
pub mod should_play;

use siddur_core::directory::PlanDirectory;
use siddur_core::{CivilDate, MemoryPlanDirectory};
use siddur_engine::{apply_engine_command, EngineCommand, EngineCommandResult, TefillaBuilder};
use std::path::Path;

/// Run one engine command against a throwaway in-memory directory
pub(crate) fn run_transient(
    builder: &TefillaBuilder,
    cmd: EngineCommand,
) -> Result<EngineCommandResult, Box<dyn std::error::Error>> {
    let mut directory = MemoryPlanDirectory::new();
    run(builder, cmd, &mut directory)
}

pub(crate) fn run(
    builder: &TefillaBuilder,
    cmd: EngineCommand,
    directory: &mut dyn PlanDirectory,
) -> Result<EngineCommandResult, Box<dyn std::error::Error>> {
    Ok(apply_engine_command(cmd, builder, directory)?)
}

pub(crate) fn load_builder(
    config: Option<&Path>,
    catalog: Option<&Path>,
) -> Result<TefillaBuilder, Box<dyn std::error::Error>> {
    Ok(TefillaBuilder::from_files(config, catalog)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<CivilDate, Box<dyn std::error::Error>> {
    raw.parse::<CivilDate>()
        .map_err(|e| siddur_core::ExError::from(e).with_op("parse_date").into())
}
