//! Section table types.

use super::view::ConditionView;
use crate::model::{ChunkRef, ServiceType};
use std::collections::BTreeMap;

/// Rule guard.
pub type Predicate = fn(&ConditionView<'_>) -> bool;

/// What a matching rule contributes.
#[derive(Clone, Copy)]
pub enum Emit {
    Chunks(&'static [&'static str]),
    /// Chunk ids that depend on a condition value (the Omer day)
    Computed(fn(&ConditionView<'_>) -> Vec<ChunkRef>),
}

impl Emit {
    pub(crate) fn chunks(&self, view: &ConditionView<'_>) -> Vec<ChunkRef> {
        match self {
            Emit::Chunks(ids) => ids.iter().map(|id| ChunkRef::from(*id)).collect(),
            Emit::Computed(f) => f(view),
        }
    }

    /// Statically known chunk ids; computed emissions have none.
    pub fn static_ids(&self) -> &'static [&'static str] {
        match *self {
            Emit::Chunks(ids) => ids,
            Emit::Computed(_) => &[],
        }
    }
}

/// A `(predicate, chunk set)` pair.
#[derive(Clone, Copy)]
pub struct Rule {
    pub when: Predicate,
    pub emit: Emit,
}

impl Rule {
    pub const fn new(when: Predicate, chunks: &'static [&'static str]) -> Self {
        Self {
            when,
            emit: Emit::Chunks(chunks),
        }
    }

    pub const fn computed(when: Predicate, f: fn(&ConditionView<'_>) -> Vec<ChunkRef>) -> Self {
        Self {
            when,
            emit: Emit::Computed(f),
        }
    }
}

/// One evaluation step within a section.
#[derive(Clone, Copy)]
pub enum Step {
    /// Always emitted
    Fixed(&'static [&'static str]),
    /// Exactly one rule must match; the first match wins
    Variant(&'static [Rule]),
    /// At most one rule contributes; the first match wins
    OneOf(&'static [Rule]),
    /// Every matching rule contributes, in table order
    Stack(&'static [Rule]),
}

impl Step {
    /// Every chunk id this step can emit without computation.
    pub fn static_ids(&self) -> Vec<&'static str> {
        match self {
            Step::Fixed(ids) => ids.to_vec(),
            Step::Variant(rules) | Step::OneOf(rules) | Step::Stack(rules) => rules
                .iter()
                .flat_map(|r| r.emit.static_ids().iter().copied())
                .collect(),
        }
    }
}

/// A named group of steps.
#[derive(Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub steps: &'static [Step],
}

/// Ordered sections per service.
#[derive(Clone, Default)]
pub struct SectionTable {
    services: BTreeMap<ServiceType, &'static [Section]>,
}

impl SectionTable {
    /// A table with no services; every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register (or replace) the sections for a service.
    pub fn with(mut self, service: ServiceType, sections: &'static [Section]) -> Self {
        self.services.insert(service, sections);
        self
    }

    pub fn sections(&self, service: ServiceType) -> Option<&'static [Section]> {
        self.services.get(&service).copied()
    }

    pub fn services(&self) -> impl Iterator<Item = ServiceType> + '_ {
        self.services.keys().copied()
    }

    /// Every statically known chunk id the table can emit for `service`,
    /// first occurrence order, without repeats.
    pub fn static_chunk_ids(&self, service: ServiceType) -> Vec<&'static str> {
        let mut seen = std::collections::BTreeSet::new();
        self.sections(service)
            .unwrap_or(&[])
            .iter()
            .flat_map(|s| s.steps.iter().flat_map(Step::static_ids))
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

impl std::fmt::Debug for SectionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<(ServiceType, Vec<&str>)> = self
            .services
            .iter()
            .map(|(service, sections)| (*service, sections.iter().map(|s| s.name).collect()))
            .collect();
        f.debug_struct("SectionTable").field("services", &names).finish()
    }
}
