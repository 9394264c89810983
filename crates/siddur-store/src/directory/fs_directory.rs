//! JSON file plan directory
//!
//! The whole directory is one JSON document. It is read once on open and
//! rewritten atomically on every `put`.

use crate::directory::atomic::atomic_write;
use crate::errors::{directory_corrupt, io_error, serialization_error, Result};
use serde::{Deserialize, Serialize};
use siddur_core::directory::{lookup, DirectoryEntry, DirectoryResult, PlanDirectory};
use siddur_core::{log_op_end, log_op_error, log_op_start, PlanSignature};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryFileV0 {
    pub schema_version: u32,
    pub entries: Vec<DirectoryEntry>,
}

/// Plan directory persisted to a single JSON file
#[derive(Debug)]
pub struct FsPlanDirectory {
    path: PathBuf,
    entries: BTreeMap<String, DirectoryEntry>,
}

impl FsPlanDirectory {
    /// Open the directory at `path`, starting empty if the file is absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        log_op_start!("directory_open", path = %path.display());
        let start = std::time::Instant::now();

        let entries = read_entries(&path).map_err(|e| {
            log_op_error!(
                "directory_open",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "directory_open",
            duration_ms = start.elapsed().as_millis() as u64,
            entry_count = entries.len()
        );

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.values()
    }

    fn persist(&self) -> Result<()> {
        let doc = DirectoryFileV0 {
            schema_version: 0,
            entries: self.entries.values().cloned().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&doc)
            .map_err(|e| serialization_error("directory_put", e))?;
        atomic_write(&self.path, &bytes)
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, DirectoryEntry>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(io_error("directory_open", e)),
    };

    let doc: DirectoryFileV0 =
        serde_json::from_slice(&bytes).map_err(|e| directory_corrupt(path, &e.to_string()))?;
    if doc.schema_version != 0 {
        return Err(directory_corrupt(
            path,
            &format!("unsupported schema_version {}", doc.schema_version),
        ));
    }

    let mut entries = BTreeMap::new();
    for entry in doc.entries {
        if entries.contains_key(&entry.key) {
            return Err(directory_corrupt(path, &format!("duplicate key {}", entry.key)));
        }
        entries.insert(entry.key.clone(), entry);
    }
    Ok(entries)
}

impl PlanDirectory for FsPlanDirectory {
    fn get(&self, signature: &PlanSignature) -> DirectoryResult<Option<DirectoryEntry>> {
        lookup(&self.entries, signature)
    }

    fn put(&mut self, entry: DirectoryEntry) -> DirectoryResult<()> {
        let key = entry.key.clone();
        let previous = self.entries.insert(key.clone(), entry);

        if let Err(e) = self.persist() {
            // Keep memory consistent with the file
            match previous {
                Some(old) => self.entries.insert(key, old),
                None => self.entries.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
