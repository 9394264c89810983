//! Siddur Core - liturgical classification and service assembly
//!
//! This crate provides the pure kernel of the Siddur workspace:
//! - Civil to lunar date conversion behind the [`calendar::CalendarProvider`] seam
//! - Date classification into a [`model::ConditionContext`]
//! - Table-driven assembly of a [`model::TefillaPlan`] per service
//! - Plan signatures used as reuse keys
//! - Catalog validation and an in-memory plan directory
//!
//! Nothing here performs I/O apart from [`config::ClassifierConfig::load`].

pub mod calendar;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod directory;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod signature;

// Re-export commonly used types
pub use calendar::{CalendarProvider, HebrewCalendar};
pub use catalog::{
    missing_chunks, validate_plan, CatalogEntry, CatalogIssue, ChunkCatalog, Language,
    MemoryCatalog,
};
pub use classify::ConditionClassifier;
pub use config::ClassifierConfig;
pub use directory::{DirectoryEntry, MemoryPlanDirectory, PlanDirectory};
pub use errors::{ExError, ExErrorKind, Result, SiddurError};
pub use model::{
    ChunkRef, CivilDate, ConditionContext, HallelLevel, HolidayIdentity, HolidayKind, LunarDate,
    LunarMonth, ServiceType, TefillaPlan,
};
pub use rules::{RuleEngine, SectionTable};
pub use signature::{signature, PlanSignature};

// Used by the logging macros
pub use siddur_core_types;
#[doc(hidden)]
pub use tracing;
