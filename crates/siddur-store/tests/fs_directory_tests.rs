#![allow(clippy::unwrap_used, clippy::expect_used)]

use siddur_core::{
    CivilDate, ConditionContext, DirectoryEntry, ExErrorKind, PlanDirectory, PlanSignature,
    RuleEngine, ServiceType, TefillaPlan,
};
use siddur_store::directory::{DirectoryFileV0, FsPlanDirectory};
use std::fs;
use tempfile::TempDir;

fn plain_weekday() -> ConditionContext {
    ConditionContext::builder().tachanun(true).build().unwrap()
}

fn signed(ctx: &ConditionContext, service: ServiceType) -> (TefillaPlan, PlanSignature) {
    RuleEngine::standard().assemble_signed(ctx, service).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let directory = FsPlanDirectory::open(dir.path().join("plans.json")).unwrap();

    assert!(directory.is_empty());
    assert!(!dir.path().join("plans.json").exists());
}

#[test]
fn test_put_persists_across_reopen() {
    // GIVEN a directory with one stored plan
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    let (plan, sig) = signed(&plain_weekday(), ServiceType::Mincha);
    {
        let mut directory = FsPlanDirectory::open(&path).unwrap();
        directory
            .put(DirectoryEntry::new(&sig, &plan, day(2025, 11, 3)))
            .unwrap();
    }

    // WHEN the file is reopened
    let reopened = FsPlanDirectory::open(&path).unwrap();

    // THEN the same plan is found under the same signature
    let entry = reopened.get(&sig).unwrap().unwrap();
    assert_eq!(entry.plan(), plan);
    assert_eq!(entry.first_civil_date, day(2025, 11, 3));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_file_is_versioned_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    let (plan, sig) = signed(&plain_weekday(), ServiceType::Maariv);

    let mut directory = FsPlanDirectory::open(&path).unwrap();
    directory
        .put(DirectoryEntry::new(&sig, &plan, day(2025, 11, 4)))
        .unwrap();

    let doc: DirectoryFileV0 = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc.schema_version, 0);
    assert_eq!(doc.entries.len(), 1);
    assert_eq!(doc.entries[0].key, sig.key());
}

#[test]
fn test_distinct_services_get_distinct_entries() {
    let dir = TempDir::new().unwrap();
    let mut directory = FsPlanDirectory::open(dir.path().join("plans.json")).unwrap();
    let ctx = plain_weekday();

    for service in ServiceType::ALL {
        let (plan, sig) = signed(&ctx, service);
        directory
            .put(DirectoryEntry::new(&sig, &plan, day(2025, 11, 3)))
            .unwrap();
    }

    assert_eq!(directory.len(), 3);
    assert_eq!(directory.entries().count(), 3);
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    fs::write(&path, "not json").unwrap();

    let err = FsPlanDirectory::open(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.op(), Some("directory_open"));
}

#[test]
fn test_future_schema_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    fs::write(&path, r#"{"schema_version": 7, "entries": []}"#).unwrap();

    let err = FsPlanDirectory::open(&path).unwrap_err();
    assert!(err.message().contains("schema_version"));
}

#[test]
fn test_tampered_conditions_surface_as_collision() {
    // GIVEN a stored entry whose canonical conditions were edited on disk
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    let (plan, sig) = signed(&plain_weekday(), ServiceType::Mincha);
    let mut entry = DirectoryEntry::new(&sig, &plan, day(2025, 11, 3));
    entry.conditions = "mincha|tachanun=false".to_string();
    let doc = DirectoryFileV0 {
        schema_version: 0,
        entries: vec![entry],
    };
    fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();

    // WHEN the original signature is looked up
    let directory = FsPlanDirectory::open(&path).unwrap();
    let err = directory.get(&sig).unwrap_err();

    // THEN the mismatch is an internal error, not a silent reuse
    assert_eq!(err.kind(), ExErrorKind::Internal);
}
