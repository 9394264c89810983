//! Chunk catalog files
//!
//! Catalog Format v0 is a YAML document listing every chunk with its script,
//! declared services and text.

pub mod digest;
pub mod format_v0;
pub mod parser;

pub use digest::compute_catalog_digest;
pub use format_v0::{CatalogChunkV0, CatalogV0};
pub use parser::{load_catalog, parse_catalog_file, parse_catalog_str};
