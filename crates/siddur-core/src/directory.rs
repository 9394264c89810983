//! Plan directory: assembled plans keyed by signature.
//!
//! Passed explicitly to whoever builds plans; there is no process-wide cache.

use crate::errors::{ExError, ExErrorKind};
use crate::model::{ChunkRef, CivilDate, ServiceType, TefillaPlan};
use crate::signature::PlanSignature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DirectoryResult<T> = std::result::Result<T, ExError>;

/// A stored plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub key: String,
    pub service: ServiceType,
    pub chunks: Vec<ChunkRef>,
    /// Canonical signature form, kept to detect key collisions
    pub conditions: String,
    /// Civil date of the first build that produced this plan
    pub first_civil_date: CivilDate,
    pub created_at: String,
}

impl DirectoryEntry {
    pub fn new(signature: &PlanSignature, plan: &TefillaPlan, civil_date: CivilDate) -> Self {
        Self {
            key: signature.key(),
            service: plan.service(),
            chunks: plan.chunks().to_vec(),
            conditions: signature.canonical().to_string(),
            first_civil_date: civil_date,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn plan(&self) -> TefillaPlan {
        TefillaPlan::new(self.service, self.chunks.clone())
    }

    /// Whether this entry was stored under `signature`
    pub fn matches(&self, signature: &PlanSignature) -> bool {
        self.key == signature.key() && self.conditions == signature.canonical()
    }
}

/// Key-value store of plans.
pub trait PlanDirectory {
    /// # Errors
    ///
    /// Implementation specific; a key collision is `Internal`.
    fn get(&self, signature: &PlanSignature) -> DirectoryResult<Option<DirectoryEntry>>;

    /// Store an entry, replacing any entry with the same key.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn put(&mut self, entry: DirectoryEntry) -> DirectoryResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collision(entry: &DirectoryEntry, signature: &PlanSignature) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("directory_get")
        .with_service(signature.service().to_string())
        .with_message(format!(
            "key {} holds '{}' but lookup was for '{}'",
            entry.key,
            entry.conditions,
            signature.canonical()
        ))
}

/// Look up `signature` in a key-indexed map, rejecting collisions.
///
/// # Errors
///
/// `Internal` when the stored entry has different canonical conditions.
pub fn lookup(
    entries: &BTreeMap<String, DirectoryEntry>,
    signature: &PlanSignature,
) -> DirectoryResult<Option<DirectoryEntry>> {
    match entries.get(&signature.key()) {
        Some(entry) if entry.matches(signature) => Ok(Some(entry.clone())),
        Some(entry) => Err(collision(entry, signature)),
        None => Ok(None),
    }
}

/// Directory held in memory for the life of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanDirectory {
    entries: BTreeMap<String, DirectoryEntry>,
}

impl MemoryPlanDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanDirectory for MemoryPlanDirectory {
    fn get(&self, signature: &PlanSignature) -> DirectoryResult<Option<DirectoryEntry>> {
        lookup(&self.entries, signature)
    }

    fn put(&mut self, entry: DirectoryEntry) -> DirectoryResult<()> {
        self.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
