//! Plan assembly.

use super::table::{Section, SectionTable, Step};
use super::view::ConditionView;
use crate::errors::{Result, SiddurError};
use crate::model::{ChunkRef, ConditionContext, ServiceType, TefillaPlan};
use crate::signature::PlanSignature;
use crate::{log_op_end, log_op_error, log_op_start};

/// Turns a condition context and a service into a [`TefillaPlan`].
///
/// Stateless apart from its table; safe to share across threads.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    table: SectionTable,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleEngine {
    pub fn new(table: SectionTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(SectionTable::standard())
    }

    pub fn table(&self) -> &SectionTable {
        &self.table
    }

    /// Assemble the ordered chunk plan.
    ///
    /// # Errors
    ///
    /// - `UnsupportedServiceType` if the table has no sections for `service`
    /// - `NoApplicableVariant` if a mandatory variant step matches nothing
    pub fn assemble(&self, ctx: &ConditionContext, service: ServiceType) -> Result<TefillaPlan> {
        self.assemble_signed(ctx, service).map(|(plan, _)| plan)
    }

    /// Assemble the plan together with the signature of the conditions
    /// that shaped it.
    ///
    /// # Errors
    ///
    /// Same as [`RuleEngine::assemble`].
    pub fn assemble_signed(
        &self,
        ctx: &ConditionContext,
        service: ServiceType,
    ) -> Result<(TefillaPlan, PlanSignature)> {
        log_op_start!("assemble", service = service.as_str());
        let start = std::time::Instant::now();

        let view = ConditionView::new(ctx);
        let plan = self.resolve(&view, service).map_err(|e| {
            log_op_error!(
                "assemble",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                service = service.as_str()
            );
            e
        })?;
        let signature = PlanSignature::from_view(service, &view);

        log_op_end!(
            "assemble",
            duration_ms = start.elapsed().as_millis() as u64,
            service = service.as_str(),
            plan_len = plan.len(),
            signature = %signature.key()
        );
        Ok((plan, signature))
    }

    fn resolve(&self, view: &ConditionView<'_>, service: ServiceType) -> Result<TefillaPlan> {
        let sections =
            self.table
                .sections(service)
                .ok_or_else(|| SiddurError::UnsupportedServiceType {
                    service: service.to_string(),
                })?;

        let mut chunks = Vec::new();
        for section in sections {
            resolve_section(section, view, service, &mut chunks)?;
        }
        Ok(TefillaPlan::new(service, chunks))
    }
}

/// Append one section's chunks, dropping an id equal to the one emitted just
/// before it within the same section.
fn resolve_section(
    section: &Section,
    view: &ConditionView<'_>,
    service: ServiceType,
    out: &mut Vec<ChunkRef>,
) -> Result<()> {
    let mut emitted: Vec<ChunkRef> = Vec::new();
    for step in section.steps {
        match step {
            Step::Fixed(ids) => emitted.extend(ids.iter().map(|id| ChunkRef::from(*id))),
            Step::Variant(rules) => {
                let rule = rules.iter().find(|r| (r.when)(view)).ok_or_else(|| {
                    SiddurError::NoApplicableVariant {
                        service: service.to_string(),
                        section: section.name.to_string(),
                    }
                })?;
                emitted.extend(rule.emit.chunks(view));
            }
            Step::OneOf(rules) => {
                if let Some(rule) = rules.iter().find(|r| (r.when)(view)) {
                    emitted.extend(rule.emit.chunks(view));
                }
            }
            Step::Stack(rules) => {
                for rule in rules.iter().filter(|r| (r.when)(view)) {
                    emitted.extend(rule.emit.chunks(view));
                }
            }
        }
    }
    emitted.dedup();
    out.extend(emitted);
    Ok(())
}
