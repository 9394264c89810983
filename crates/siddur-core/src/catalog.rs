//! Chunk catalog interface and plan validation.
//!
//! The catalog is external data. Assembly never consults it; validation
//! reports gaps without failing the plan.

use crate::errors::{ExError, ExErrorKind, Result, SiddurError};
use crate::model::{ChunkRef, ServiceType, TefillaPlan};
use crate::rules::SectionTable;
use serde::{Deserialize, Serialize};
use siddur_core_types::schema::EVENT_CATALOG_ISSUE;
use std::collections::BTreeMap;

/// Script of a chunk's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    En,
}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ChunkRef,
    pub language: Language,
    /// Services the chunk is declared for; empty means any service.
    #[serde(default)]
    pub services: Vec<ServiceType>,
    pub text: String,
}

impl CatalogEntry {
    pub fn declares(&self, service: ServiceType) -> bool {
        self.services.is_empty() || self.services.contains(&service)
    }
}

/// Read-only chunk lookup.
pub trait ChunkCatalog {
    fn entry(&self, id: &ChunkRef) -> Option<&CatalogEntry>;

    fn exists(&self, id: &ChunkRef) -> bool {
        self.entry(id).is_some()
    }

    fn text_of(&self, id: &ChunkRef) -> Option<&str> {
        self.entry(id).map(|e| e.text.as_str())
    }
}

/// In-memory catalog keyed by chunk id.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: BTreeMap<ChunkRef, CatalogEntry>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// `InvalidInput` on a duplicate id.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// # Errors
    ///
    /// `InvalidInput` if the id is already present.
    pub fn insert(&mut self, entry: CatalogEntry) -> Result<()> {
        if self.entries.contains_key(&entry.id) {
            return Err(SiddurError::InvalidInput {
                reason: format!("duplicate chunk id '{}'", entry.id),
            });
        }
        self.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ChunkRef> {
        self.entries.keys()
    }
}

impl ChunkCatalog for MemoryCatalog {
    fn entry(&self, id: &ChunkRef) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }
}

/// A gap between a plan and the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    ChunkNotInCatalog {
        chunk: ChunkRef,
        position: usize,
    },
    ServiceNotDeclared {
        chunk: ChunkRef,
        service: ServiceType,
    },
}

impl CatalogIssue {
    pub fn chunk(&self) -> &ChunkRef {
        match self {
            CatalogIssue::ChunkNotInCatalog { chunk, .. }
            | CatalogIssue::ServiceNotDeclared { chunk, .. } => chunk,
        }
    }
}

impl From<&CatalogIssue> for ExError {
    fn from(issue: &CatalogIssue) -> Self {
        match issue {
            CatalogIssue::ChunkNotInCatalog { chunk, position } => {
                ExError::from(SiddurError::ChunkNotInCatalog {
                    chunk: chunk.to_string(),
                })
                .with_message(format!("Chunk not in catalog at position {}", position))
            }
            CatalogIssue::ServiceNotDeclared { chunk, service } => {
                ExError::new(ExErrorKind::ChunkNotInCatalog)
                    .with_op("validate_plan")
                    .with_chunk_id(chunk.to_string())
                    .with_service(service.to_string())
                    .with_message("Chunk is not declared for this service")
            }
        }
    }
}

/// Check every chunk of `plan` against `catalog`.
///
/// Each issue is also logged at `warn`.
pub fn validate_plan(plan: &TefillaPlan, catalog: &dyn ChunkCatalog) -> Vec<CatalogIssue> {
    let service = plan.service();
    let issues: Vec<CatalogIssue> = plan
        .iter()
        .enumerate()
        .filter_map(|(position, chunk)| match catalog.entry(chunk) {
            None => Some(CatalogIssue::ChunkNotInCatalog {
                chunk: chunk.clone(),
                position,
            }),
            Some(entry) if !entry.declares(service) => Some(CatalogIssue::ServiceNotDeclared {
                chunk: chunk.clone(),
                service,
            }),
            Some(_) => None,
        })
        .collect();

    for issue in &issues {
        let err = ExError::from(issue);
        tracing::warn!(
            component = module_path!(),
            op = "validate_plan",
            event = EVENT_CATALOG_ISSUE,
            service = service.as_str(),
            chunk_id = issue.chunk().as_str(),
            err.code = err.code(),
        );
    }
    issues
}

/// Static chunk ids the table can emit that the catalog lacks, per service.
pub fn missing_chunks(
    table: &SectionTable,
    catalog: &dyn ChunkCatalog,
) -> Vec<(ServiceType, ChunkRef)> {
    table
        .services()
        .flat_map(|service| {
            table
                .static_chunk_ids(service)
                .into_iter()
                .map(ChunkRef::from)
                .filter(|id| !catalog.exists(id))
                .map(move |id| (service, id))
        })
        .collect()
}
