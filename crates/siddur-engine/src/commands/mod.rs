//! Command orchestration layer.

pub mod build;
pub mod engine_command;
pub mod schedule;
