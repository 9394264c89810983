//! Plan building: classify, assemble, validate, then reuse or store.

use serde::Serialize;
use siddur_core::calendar::CalendarProvider;
use siddur_core::directory::{DirectoryEntry, PlanDirectory};
use siddur_core::{
    log_op_end, log_op_error, log_op_start, validate_plan, CatalogIssue, ChunkCatalog,
    CivilDate, ClassifierConfig, ConditionClassifier, ConditionContext, ExError,
    HebrewCalendar, PlanSignature, RuleEngine, ServiceType, TefillaPlan,
};
use siddur_core_types::schema::EVENT_REUSED;
use siddur_store::errors::Result;
use std::path::Path;

/// Result of one build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub civil_date: CivilDate,
    pub plan: TefillaPlan,
    pub signature: PlanSignature,
    pub context: ConditionContext,
    /// Catalog gaps; empty when no catalog is attached
    pub issues: Vec<CatalogIssue>,
    /// True when the plan came from the directory
    pub reused: bool,
}

/// Builds service plans for civil dates.
pub struct TefillaBuilder<P = HebrewCalendar> {
    classifier: ConditionClassifier<P>,
    engine: RuleEngine,
    catalog: Option<Box<dyn ChunkCatalog>>,
}

impl TefillaBuilder<HebrewCalendar> {
    /// Builder over the built-in Hebrew calendar and the standard section tables.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `config` fails validation.
    pub fn standard(config: ClassifierConfig) -> Result<Self> {
        let classifier = ConditionClassifier::standard(config)?;
        Ok(Self::new(classifier, RuleEngine::standard()))
    }

    /// Builder configured from optional TOML config and YAML catalog files.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unreadable or invalid config file,
    /// `InvalidInput` for a catalog that fails to parse.
    pub fn from_files(config: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => ClassifierConfig::load(path)?,
            None => ClassifierConfig::default(),
        };
        let builder = Self::standard(config)?;
        match catalog {
            Some(path) => Ok(builder.with_catalog(siddur_store::load_catalog(path)?)),
            None => Ok(builder),
        }
    }
}

impl<P: CalendarProvider> TefillaBuilder<P> {
    pub fn new(classifier: ConditionClassifier<P>, engine: RuleEngine) -> Self {
        Self {
            classifier,
            engine,
            catalog: None,
        }
    }

    /// Attach a catalog; built plans are then checked against it.
    pub fn with_catalog(mut self, catalog: impl ChunkCatalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn classifier(&self) -> &ConditionClassifier<P> {
        &self.classifier
    }

    pub fn catalog(&self) -> Option<&dyn ChunkCatalog> {
        self.catalog.as_deref()
    }

    /// Build the plan for `service` on `date`.
    ///
    /// A plan already stored under the same signature is returned as is;
    /// otherwise the new plan is stored in `directory`.
    ///
    /// # Errors
    ///
    /// Classification and assembly errors, tagged with the date and service,
    /// plus any directory failure. Catalog gaps are reported in
    /// [`BuildOutcome::issues`] and never fail the build.
    pub fn build(
        &self,
        date: &CivilDate,
        service: ServiceType,
        directory: &mut dyn PlanDirectory,
    ) -> Result<BuildOutcome> {
        log_op_start!("build_tefilla", civil_date = %date, service = service.as_str());
        let start = std::time::Instant::now();

        let outcome = self.build_impl(date, service, directory).map_err(|e| {
            log_op_error!(
                "build_tefilla",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                civil_date = %date,
                service = service.as_str()
            );
            e
        })?;

        log_op_end!(
            "build_tefilla",
            duration_ms = start.elapsed().as_millis() as u64,
            civil_date = %date,
            service = service.as_str(),
            plan_len = outcome.plan.len(),
            signature = %outcome.signature.key(),
            issue_count = outcome.issues.len(),
            reused = outcome.reused
        );
        Ok(outcome)
    }

    fn build_impl(
        &self,
        date: &CivilDate,
        service: ServiceType,
        directory: &mut dyn PlanDirectory,
    ) -> Result<BuildOutcome> {
        let tag = |e: siddur_core::SiddurError| {
            ExError::from(e)
                .with_civil_date(date.to_string())
                .with_service(service.as_str())
        };

        let context = self.classifier.classify_for_service(date, service).map_err(tag)?;
        let (plan, signature) = self.engine.assemble_signed(&context, service).map_err(tag)?;

        let issues = match self.catalog() {
            Some(catalog) => validate_plan(&plan, catalog),
            None => Vec::new(),
        };

        let (plan, reused) = match directory.get(&signature)? {
            Some(entry) => {
                tracing::info!(
                    component = module_path!(),
                    op = "build_tefilla",
                    event = EVENT_REUSED,
                    signature = %signature.key(),
                    first_civil_date = %entry.first_civil_date,
                );
                (entry.plan(), true)
            }
            None => {
                directory.put(DirectoryEntry::new(&signature, &plan, *date))?;
                (plan, false)
            }
        };

        Ok(BuildOutcome {
            civil_date: *date,
            plan,
            signature,
            context,
            issues,
            reused,
        })
    }
}
