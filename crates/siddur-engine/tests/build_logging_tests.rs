#![allow(clippy::unwrap_used, clippy::expect_used)]

use siddur_core::logging_facility::test_capture::init_test_capture;
use siddur_core::{ClassifierConfig, MemoryPlanDirectory, ServiceType};
use siddur_engine::TefillaBuilder;

#[test]
fn test_build_logs_start_end_and_reuse() {
    let capture = init_test_capture();
    let builder = TefillaBuilder::standard(ClassifierConfig::default()).unwrap();
    let mut directory = MemoryPlanDirectory::new();

    // Two ordinary evenings in Cheshvan 5787 share one plan
    builder
        .build(&"2026-11-02".parse().unwrap(), ServiceType::Maariv, &mut directory)
        .unwrap();
    builder
        .build(&"2026-11-03".parse().unwrap(), ServiceType::Maariv, &mut directory)
        .unwrap();

    let events = capture.events_for_op("build_tefilla");
    let for_date = |d: &str, ev: &str| {
        events
            .iter()
            .filter(|e| e.field("civil_date") == Some(d) && e.event.as_deref() == Some(ev))
            .count()
    };
    assert_eq!(for_date("2026-11-02", "start"), 1);
    assert_eq!(for_date("2026-11-03", "end"), 1);

    let reused: Vec<_> = events
        .iter()
        .filter(|e| {
            e.event.as_deref() == Some("reused")
                && e.field("first_civil_date") == Some("2026-11-02")
        })
        .collect();
    assert_eq!(reused.len(), 1);
}

#[test]
fn test_failed_build_logs_end_error() {
    let capture = init_test_capture();
    let builder = TefillaBuilder::standard(ClassifierConfig::default()).unwrap();
    let mut directory = MemoryPlanDirectory::new();

    let _ = builder.build(&"1777-07-04".parse().unwrap(), ServiceType::Mincha, &mut directory);

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("build_tefilla")
            && e.event.as_deref() == Some("end_error")
            && e.field("civil_date") == Some("1777-07-04")
            && e.field("err.code") == Some("ERR_DATE_OUT_OF_RANGE")
    });
    assert_eq!(errors, 1);
}
