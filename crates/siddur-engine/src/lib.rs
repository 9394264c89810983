//! Siddur Engine - Orchestration layer
//!
//! Coordinates classification, assembly, catalog validation and plan reuse
//! on top of the pure core and the file-backed store.

pub mod commands;

pub use commands::build::{BuildOutcome, TefillaBuilder};
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::schedule::{is_shabbos_or_yom_tov, should_play};
