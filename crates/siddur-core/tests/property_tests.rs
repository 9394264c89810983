#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::diaspora;
use proptest::prelude::*;
use siddur_core::{
    signature, CivilDate, ConditionContext, HallelLevel, HolidayIdentity, RuleEngine, ServiceType,
};

fn holiday_strategy() -> impl Strategy<Value = HolidayIdentity> {
    prop_oneof![
        Just(HolidayIdentity::None),
        Just(HolidayIdentity::RoshHashana),
        Just(HolidayIdentity::YomKippur),
        (1u8..=7).prop_map(HolidayIdentity::Sukkot),
        Just(HolidayIdentity::SheminiAtzeret),
        Just(HolidayIdentity::SimchatTorah),
        (1u8..=8).prop_map(HolidayIdentity::Pesach),
        (1u8..=2).prop_map(HolidayIdentity::Shavuot),
        (1u8..=8).prop_map(HolidayIdentity::Chanukah),
        Just(HolidayIdentity::Purim),
        Just(HolidayIdentity::ShushanPurim),
    ]
}

fn service_strategy() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::Shacharis),
        Just(ServiceType::Mincha),
        Just(ServiceType::Maariv),
    ]
}

fn context_strategy() -> impl Strategy<Value = ConditionContext> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        holiday_strategy(),
        0u8..=2,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0u8..=49,
        any::<bool>(),
    )
        .prop_map(
            |(sabbath, yom_tov, chol_hamoed, holiday, rc, ayt, rain, req, fast, av, omer, tach)| {
                let yom_tov = yom_tov && !chol_hamoed;
                let rest_day = sabbath || yom_tov || chol_hamoed || rc > 0;
                ConditionContext::builder()
                    .sabbath(sabbath)
                    .yom_tov(yom_tov)
                    .chol_hamoed(chol_hamoed)
                    .holiday(holiday)
                    .rosh_chodesh(rc)
                    .aseret_yemei_teshuvah(ayt)
                    .rain_season(rain)
                    .rain_request(req)
                    .fast_day(fast)
                    .tisha_bav(fast && av)
                    .omer_day(omer)
                    .tachanun(tach && !rest_day)
                    .build()
                    .expect("strategy only produces valid contexts")
            },
        )
}

/// Days from 1900-01-01 to 2199-12-31
const RANGE_DAYS: i64 = 109_572;

fn date_strategy() -> impl Strategy<Value = CivilDate> {
    (0..=RANGE_DAYS).prop_map(|offset| {
        CivilDate::from_ymd(1900, 1, 1)
            .and_then(|d| d.add_days(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn prop_assembly_is_deterministic(ctx in context_strategy(), service in service_strategy()) {
        let engine = RuleEngine::standard();
        let (plan_a, sig_a) = engine.assemble_signed(&ctx, service).unwrap();
        let (plan_b, sig_b) = engine.assemble_signed(&ctx.clone(), service).unwrap();
        prop_assert_eq!(plan_a, plan_b);
        prop_assert_eq!(sig_a, sig_b);
    }

    #[test]
    fn prop_equal_signatures_mean_equal_plans(
        a in context_strategy(),
        b in context_strategy(),
        service in service_strategy(),
    ) {
        let engine = RuleEngine::standard();
        let (plan_a, sig_a) = engine.assemble_signed(&a, service).unwrap();
        let (plan_b, sig_b) = engine.assemble_signed(&b, service).unwrap();
        if sig_a == sig_b {
            prop_assert_eq!(plan_a, plan_b);
        }
    }

    #[test]
    fn prop_signature_ignores_unread_fields(ctx in context_strategy(), omer in 0u8..=49) {
        // Mincha never reads the Omer day, so rewriting it keeps the signature
        let engine = RuleEngine::standard();
        let rewritten = ctx.to_builder().omer_day(omer).build().unwrap();
        let a = signature(&engine, &ctx, ServiceType::Mincha).unwrap();
        let b = signature(&engine, &rewritten, ServiceType::Mincha).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_plans_are_never_empty(ctx in context_strategy(), service in service_strategy()) {
        let plan = RuleEngine::standard().assemble(&ctx, service).unwrap();
        prop_assert!(!plan.is_empty());
        prop_assert_eq!(plan.service(), service);
    }

    #[test]
    fn prop_classified_contexts_hold_invariants(date in date_strategy()) {
        let ctx = diaspora().classify(&date).unwrap();
        prop_assert!(ctx.seasonal_rain() ^ ctx.seasonal_dew());
        prop_assert!(!(ctx.is_yom_tov() && ctx.is_chol_hamoed()));
        prop_assert_eq!(
            ctx.hallel_level(),
            HallelLevel::derive(ctx.holiday(), ctx.is_rosh_chodesh(), ctx.is_chol_hamoed())
        );
        if ctx.is_rosh_chodesh() {
            prop_assert!((1..=2).contains(&ctx.rosh_chodesh_day_count()));
        } else {
            prop_assert_eq!(ctx.rosh_chodesh_day_count(), 0);
        }
        prop_assert!(ctx.omer_day() <= 49);
        if ctx.is_sabbath() || ctx.is_yom_tov() || ctx.is_chol_hamoed() || ctx.is_rosh_chodesh() {
            prop_assert!(!ctx.tachanun());
        }
        if ctx.is_tisha_bav() {
            prop_assert!(ctx.is_fast_day());
        }
    }

    #[test]
    fn prop_no_tachanun_or_avinu_malkeinu_on_sabbath(
        ctx in context_strategy(),
        service in service_strategy(),
    ) {
        let plan = RuleEngine::standard().assemble(&ctx, service).unwrap();
        if ctx.is_sabbath() {
            prop_assert!(!plan.contains("tachanun"));
            prop_assert!(!plan.contains("avinu_malkeinu"));
        }
        if ctx.is_tisha_bav() {
            prop_assert!(!plan.contains("avinu_malkeinu"));
        }
    }

    #[test]
    fn prop_classification_is_deterministic(date in date_strategy()) {
        let classifier = diaspora();
        prop_assert_eq!(classifier.classify(&date).unwrap(), classifier.classify(&date).unwrap());
    }
}
