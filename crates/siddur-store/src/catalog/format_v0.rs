//! Catalog Format v0 schema
//!
//! ```yaml
//! schema_version: 0
//! chunks:
//!   - id: aleinu
//!     language: he
//!     services: [shacharis, mincha, maariv]
//!     text: "..."
//! ```

use serde::{Deserialize, Serialize};
use siddur_core::{CatalogEntry, ChunkRef, Language, ServiceType};

/// Top-level catalog file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Chunks, in any order
    pub chunks: Vec<CatalogChunkV0>,
}

/// One chunk record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogChunkV0 {
    pub id: String,

    pub language: Language,

    /// Services the chunk belongs to; omitted means all
    #[serde(default)]
    pub services: Vec<ServiceType>,

    pub text: String,
}

impl From<CatalogChunkV0> for CatalogEntry {
    fn from(chunk: CatalogChunkV0) -> Self {
        CatalogEntry {
            id: ChunkRef::new(chunk.id),
            language: chunk.language,
            services: chunk.services,
            text: chunk.text,
        }
    }
}
