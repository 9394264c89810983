//! Catalog digest computation
//!
//! The digest covers the raw file bytes, so any edit (including whitespace)
//! yields a new digest.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 of the catalog source (64 characters)
pub fn compute_catalog_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let a = compute_catalog_digest("schema_version: 0\nchunks: []\n");
        let b = compute_catalog_digest("schema_version: 0\nchunks: []\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_digest_sensitive_to_whitespace() {
        assert_ne!(
            compute_catalog_digest("chunks: []"),
            compute_catalog_digest("chunks:  []")
        );
    }
}
