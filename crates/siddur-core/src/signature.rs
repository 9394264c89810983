//! Plan signatures.
//!
//! A signature covers the service and exactly the condition fields the rule
//! engine consulted while resolving a plan, so days that differ only in
//! fields a service never reads share one signature. The civil date is never
//! part of it.

use crate::errors::Result;
use crate::model::{ConditionContext, ServiceType};
use crate::rules::{ConditionView, RuleEngine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex characters of the digest kept in [`PlanSignature::key`].
const KEY_DIGEST_LEN: usize = 16;

/// Stable identity of an assembled plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanSignature {
    service: ServiceType,
    canonical: String,
    digest: String,
}

impl PlanSignature {
    /// Build from the reads recorded on `view`.
    pub(crate) fn from_view(service: ServiceType, view: &ConditionView<'_>) -> Self {
        let mut canonical = service.as_str().to_string();
        for field in view.touched() {
            canonical.push('|');
            canonical.push_str(field.name());
            canonical.push('=');
            canonical.push_str(&view.value_of(field));
        }
        let digest = hash_string(&canonical);
        Self {
            service,
            canonical,
            digest,
        }
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    /// `service|field=value|...` over the consulted fields
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// SHA-256 of the canonical form, hex encoded
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Short lookup key, e.g. `mincha-3f2a9c0b1d4e5f60`.
    pub fn key(&self) -> String {
        let short = self.digest.get(..KEY_DIGEST_LEN).unwrap_or(&self.digest);
        format!("{}-{}", self.service, short)
    }
}

impl fmt::Display for PlanSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Signature of the plan `engine` would assemble for `ctx` and `service`.
///
/// # Errors
///
/// Same as [`RuleEngine::assemble`]: a plan that cannot be assembled has no
/// signature.
pub fn signature(
    engine: &RuleEngine,
    ctx: &ConditionContext,
    service: ServiceType,
) -> Result<PlanSignature> {
    engine.assemble_signed(ctx, service).map(|(_, sig)| sig)
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_deterministic() {
        let hash1 = hash_string("mincha|sabbath=false");
        let hash2 = hash_string("mincha|sabbath=false");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_key_uses_service_and_digest_prefix() {
        let ctx = ConditionContext::builder().build().unwrap();
        let sig = signature(&RuleEngine::standard(), &ctx, ServiceType::Mincha).unwrap();
        let key = sig.key();
        assert!(key.starts_with("mincha-"));
        assert_eq!(key.len(), "mincha-".len() + KEY_DIGEST_LEN);
        assert!(sig.canonical().starts_with("mincha|"));
        assert_eq!(sig.to_string(), key);
    }

    #[test]
    fn test_canonical_form_never_mentions_unread_fields() {
        let ctx = ConditionContext::builder().omer_day(12).build().unwrap();
        let sig = signature(&RuleEngine::standard(), &ctx, ServiceType::Mincha).unwrap();
        assert!(!sig.canonical().contains("omer_day"));
        assert!(!sig.canonical().contains("hallel"));
    }
}
