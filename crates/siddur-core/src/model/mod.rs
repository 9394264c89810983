//! Domain models: dates, conditions, services and plans.

pub mod condition;
pub mod date;
pub mod plan;
pub mod service;

pub use condition::{
    ConditionContext, ConditionContextBuilder, HallelLevel, HolidayIdentity, HolidayKind,
};
pub use date::{CivilDate, LunarDate, LunarMonth};
pub use plan::{ChunkRef, TefillaPlan};
pub use service::ServiceType;
