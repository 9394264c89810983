//! Siddur Store - file-backed catalog and plan directory
//!
//! Provides:
//! - Catalog Format v0 (YAML) parser with validation
//! - Catalog digests for provenance logging
//! - A JSON plan directory with atomic writes

pub mod catalog;
pub mod directory;
pub mod errors;

// Re-export key types
pub use catalog::{load_catalog, parse_catalog_str};
pub use directory::FsPlanDirectory;
pub use errors::Result;
