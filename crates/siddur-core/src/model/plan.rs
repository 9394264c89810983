use super::service::ServiceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one unit of prayer text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkRef(String);

impl ChunkRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChunkRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ChunkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered chunk sequence for one service on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TefillaPlan {
    service: ServiceType,
    chunks: Vec<ChunkRef>,
}

impl TefillaPlan {
    pub fn new(service: ServiceType, chunks: Vec<ChunkRef>) -> Self {
        Self { service, chunks }
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    pub fn chunks(&self) -> &[ChunkRef] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChunkRef> {
        self.chunks.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.chunks.iter().any(|c| c.as_str() == id)
    }

    /// Index of the first occurrence of `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.chunks.iter().position(|c| c.as_str() == id)
    }

    /// Chunk ids as plain strings, in order
    pub fn ids(&self) -> Vec<&str> {
        self.chunks.iter().map(ChunkRef::as_str).collect()
    }

    pub fn into_chunks(self) -> Vec<ChunkRef> {
        self.chunks
    }
}

impl<'a> IntoIterator for &'a TefillaPlan {
    type Item = &'a ChunkRef;
    type IntoIter = std::slice::Iter<'a, ChunkRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
