//! Content assembly.
//!
//! A service is an ordered list of [`Section`]s. Each section is a list of
//! [`Step`]s whose rules are plain predicates over a [`ConditionView`]. The
//! view remembers which condition fields the predicates read, and those reads
//! become the plan signature.

pub mod assembler;
pub mod standard;
pub mod table;
pub mod view;

pub use assembler::RuleEngine;
pub use table::{Emit, Predicate, Rule, Section, SectionTable, Step};
pub use view::{ConditionView, Field};
