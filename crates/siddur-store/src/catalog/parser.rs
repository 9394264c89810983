//! Catalog parser with validation
//!
//! Parses YAML and validates schema version, id uniqueness and content

use crate::catalog::digest::compute_catalog_digest;
use crate::catalog::format_v0::CatalogV0;
use crate::errors::{catalog_chunk_invalid, catalog_validation, Result};
use siddur_core::{log_op_end, log_op_error, log_op_start, MemoryCatalog};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a catalog file from a path
pub fn parse_catalog_file(path: &Path) -> Result<CatalogV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| catalog_validation(&format!("Failed to read catalog file: {}", e)))?;

    parse_catalog_str(&content)
}

/// Parse a catalog from a string
pub fn parse_catalog_str(content: &str) -> Result<CatalogV0> {
    let catalog: CatalogV0 = serde_yaml::from_str(content)
        .map_err(|e| catalog_validation(&format!("YAML parse error: {}", e)))?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Read, validate and index a catalog file
pub fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    log_op_start!("catalog_load", path = %path.display());
    let start = std::time::Instant::now();

    let result = load_catalog_impl(path).map_err(|e| {
        log_op_error!(
            "catalog_load",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "catalog_load",
        duration_ms = start.elapsed().as_millis() as u64,
        chunk_count = result.0.len(),
        catalog_digest = result.1.as_str()
    );

    Ok(result.0)
}

fn load_catalog_impl(path: &Path) -> Result<(MemoryCatalog, String)> {
    let content = fs::read_to_string(path)
        .map_err(|e| catalog_validation(&format!("Failed to read catalog file: {}", e)))?;
    let digest = compute_catalog_digest(&content);
    let parsed = parse_catalog_str(&content)?;

    // Ids are unique after validation, so insertion cannot fail
    let catalog = MemoryCatalog::from_entries(parsed.chunks.into_iter().map(Into::into))?;
    Ok((catalog, digest))
}

/// Validate a parsed catalog
fn validate_catalog(catalog: &CatalogV0) -> Result<()> {
    // Validate schema version
    if catalog.schema_version != 0 {
        return Err(catalog_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            catalog.schema_version
        )));
    }

    let mut ids = HashSet::new();
    for chunk in &catalog.chunks {
        if !is_valid_id(&chunk.id) {
            return Err(catalog_chunk_invalid(
                &chunk.id,
                &format!("Chunk id '{}' must be lowercase snake_case", chunk.id),
            ));
        }
        if !ids.insert(chunk.id.as_str()) {
            return Err(catalog_chunk_invalid(
                &chunk.id,
                &format!("Duplicate chunk id: {}", chunk.id),
            ));
        }
        if chunk.text.trim().is_empty() {
            return Err(catalog_chunk_invalid(
                &chunk.id,
                &format!("Chunk {} has empty text", chunk.id),
            ));
        }
    }

    Ok(())
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_rules() {
        assert!(is_valid_id("sefiras_haomer_day_12"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("Aleinu"));
        assert!(!is_valid_id("uva letzion"));
    }
}
