//! Engine-level commands dispatched by front ends.

use crate::commands::build::{BuildOutcome, TefillaBuilder};
use crate::commands::schedule::should_play;
use siddur_core::calendar::CalendarProvider;
use siddur_core::directory::PlanDirectory;
use siddur_core::{CivilDate, ConditionContext, ExError, ServiceType};
use siddur_store::errors::Result;

/// Engine-level commands.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Classify the daytime conditions of a date.
    Classify { date: CivilDate },
    /// Build (or reuse) the plan for one service.
    BuildPlan {
        date: CivilDate,
        service: ServiceType,
    },
    /// Decide whether a recording plays at `hour`.
    ShouldPlay { date: CivilDate, hour: u32 },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Classified(ConditionContext),
    Built(Box<BuildOutcome>),
    ShouldPlay(Option<ServiceType>),
}

/// Apply an engine command.
///
/// # Errors
///
/// Whatever the underlying operation returns.
pub fn apply_engine_command<P: CalendarProvider>(
    cmd: EngineCommand,
    builder: &TefillaBuilder<P>,
    directory: &mut dyn PlanDirectory,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Classify { date } => builder
            .classifier()
            .classify(&date)
            .map(EngineCommandResult::Classified)
            .map_err(ExError::from),
        EngineCommand::BuildPlan { date, service } => builder
            .build(&date, service, directory)
            .map(|outcome| EngineCommandResult::Built(Box::new(outcome))),
        EngineCommand::ShouldPlay { date, hour } => {
            should_play(builder.classifier(), &date, hour).map(EngineCommandResult::ShouldPlay)
        }
    }
}
