//! The standard section table.
//!
//! Specific rules precede general ones; within a `Stack`, table order is
//! recitation order.

use super::table::{Rule, Section, SectionTable, Step};
use super::view::ConditionView;
use crate::model::{ChunkRef, HallelLevel, HolidayKind, ServiceType};

// ===== Predicates =====

fn always(_: &ConditionView<'_>) -> bool {
    true
}

fn is_sabbath(v: &ConditionView<'_>) -> bool {
    v.is_sabbath()
}

fn is_sabbath_or_yom_tov(v: &ConditionView<'_>) -> bool {
    v.is_sabbath() || v.is_yom_tov()
}

fn is_rosh_hashana(v: &ConditionView<'_>) -> bool {
    v.holiday_kind() == HolidayKind::RoshHashana
}

fn is_yom_kippur(v: &ConditionView<'_>) -> bool {
    v.holiday_kind() == HolidayKind::YomKippur
}

fn is_yom_tov(v: &ConditionView<'_>) -> bool {
    v.is_yom_tov()
}

fn festival_on_sabbath(v: &ConditionView<'_>) -> bool {
    v.is_yom_tov() && v.is_sabbath()
}

fn ten_days_weekday_form(v: &ConditionView<'_>) -> bool {
    v.is_aseret_yemei_teshuvah()
        && !matches!(
            v.holiday_kind(),
            HolidayKind::RoshHashana | HolidayKind::YomKippur
        )
}

fn chol_hamoed_sukkot(v: &ConditionView<'_>) -> bool {
    v.is_chol_hamoed() && v.holiday_kind() == HolidayKind::Sukkot
}

fn chol_hamoed_pesach(v: &ConditionView<'_>) -> bool {
    v.is_chol_hamoed() && v.holiday_kind() == HolidayKind::Pesach
}

fn is_chanukah(v: &ConditionView<'_>) -> bool {
    v.holiday_kind() == HolidayKind::Chanukah
}

fn is_purim(v: &ConditionView<'_>) -> bool {
    v.holiday_kind() == HolidayKind::Purim
}

fn is_rosh_chodesh(v: &ConditionView<'_>) -> bool {
    v.is_rosh_chodesh()
}

fn is_fast_day(v: &ConditionView<'_>) -> bool {
    v.is_fast_day()
}

fn rain_praise(v: &ConditionView<'_>) -> bool {
    v.seasonal_rain()
}

fn dew_praise(v: &ConditionView<'_>) -> bool {
    v.seasonal_dew()
}

fn weekday_rain_request(v: &ConditionView<'_>) -> bool {
    !v.is_yom_tov() && !v.is_sabbath() && v.rain_request()
}

fn full_hallel(v: &ConditionView<'_>) -> bool {
    v.hallel_level() == HallelLevel::Full
}

fn partial_hallel(v: &ConditionView<'_>) -> bool {
    v.hallel_level() == HallelLevel::Partial
}

fn says_avinu_malkeinu(v: &ConditionView<'_>) -> bool {
    let fast = v.is_fast_day() && !v.is_tisha_bav();
    (v.is_aseret_yemei_teshuvah() || fast) && !v.is_sabbath()
}

fn says_tachanun(v: &ConditionView<'_>) -> bool {
    v.tachanun() && !v.is_sabbath()
}

fn counting_omer(v: &ConditionView<'_>) -> bool {
    v.omer_day() > 0
}

fn omer_day_chunk(v: &ConditionView<'_>) -> Vec<ChunkRef> {
    vec![ChunkRef::new(format!("sefiras_haomer_day_{}", v.omer_day()))]
}

// ===== Shared steps =====

static PESUKEI_DEZIMRA: [Rule; 2] = [
    Rule::new(is_sabbath_or_yom_tov, &["pesukei_dezimra_shabbos"]),
    Rule::new(always, &["pesukei_dezimra_weekday"]),
];

static SHEMA_BLESSINGS: [Rule; 2] = [
    Rule::new(is_sabbath_or_yom_tov, &["birchos_krias_shema_shabbos"]),
    Rule::new(always, &["birchos_krias_shema_weekday"]),
];

static AMIDAH_SHACHARIS: [Rule; 5] = [
    Rule::new(is_rosh_hashana, &["amidah_rosh_hashana"]),
    Rule::new(is_yom_kippur, &["amidah_yom_kippur"]),
    Rule::new(is_yom_tov, &["amidah_yom_tov"]),
    Rule::new(is_sabbath, &["amidah_shabbos_shacharis"]),
    Rule::new(always, &["amidah_weekday"]),
];

static AMIDAH_MINCHA: [Rule; 5] = [
    Rule::new(is_rosh_hashana, &["amidah_rosh_hashana"]),
    Rule::new(is_yom_kippur, &["amidah_yom_kippur"]),
    Rule::new(is_yom_tov, &["amidah_yom_tov"]),
    Rule::new(is_sabbath, &["amidah_shabbos_mincha"]),
    Rule::new(always, &["amidah_weekday"]),
];

static AMIDAH_MAARIV: [Rule; 5] = [
    Rule::new(is_rosh_hashana, &["amidah_rosh_hashana"]),
    Rule::new(is_yom_kippur, &["amidah_yom_kippur"]),
    Rule::new(is_yom_tov, &["amidah_yom_tov"]),
    Rule::new(is_sabbath, &["amidah_shabbos_maariv"]),
    Rule::new(always, &["amidah_weekday"]),
];

static SABBATH_IN_FESTIVAL: [Rule; 1] =
    [Rule::new(festival_on_sabbath, &["amidah_shabbos_mention"])];

static TEN_DAYS: [Rule; 1] = [Rule::new(
    ten_days_weekday_form,
    &["aseret_yemei_teshuvah_insertions"],
)];

static CHOL_HAMOED: [Rule; 2] = [
    Rule::new(chol_hamoed_sukkot, &["yaaleh_veyavo_sukkos"]),
    Rule::new(chol_hamoed_pesach, &["yaaleh_veyavo_pesach"]),
];

static DAY_INSERTIONS: [Rule; 3] = [
    Rule::new(is_chanukah, &["al_hanissim_chanukah"]),
    Rule::new(is_purim, &["al_hanissim_purim"]),
    Rule::new(is_rosh_chodesh, &["yaaleh_veyavo_rosh_chodesh"]),
];

static ANEINU: [Rule; 1] = [Rule::new(is_fast_day, &["aneinu"])];

static SEASONAL_PRAISE: [Rule; 2] = [
    Rule::new(rain_praise, &["mashiv_haruach"]),
    Rule::new(dew_praise, &["morid_hatal"]),
];

static RAIN_REQUEST: [Rule; 1] = [Rule::new(weekday_rain_request, &["vesein_tal_umatar"])];

static HALLEL: [Rule; 2] = [
    Rule::new(
        full_hallel,
        &["hallel_opening_bracha", "hallel_full", "hallel_closing_bracha"],
    ),
    Rule::new(
        partial_hallel,
        &["hallel_opening_bracha", "hallel_partial", "hallel_closing_bracha"],
    ),
];

static PENITENTIAL: [Rule; 2] = [
    Rule::new(says_avinu_malkeinu, &["avinu_malkeinu"]),
    Rule::new(says_tachanun, &["tachanun"]),
];

static BORCHI_NAFSHI: [Rule; 1] = [Rule::new(is_rosh_chodesh, &["borchi_nafshi"])];

static OMER: [Rule; 2] = [
    Rule::new(counting_omer, &["sefiras_haomer_bracha"]),
    Rule::computed(counting_omer, omer_day_chunk),
];

// ===== Services =====

static SHACHARIS: [Section; 7] = [
    Section {
        name: "birchos_hashachar",
        steps: &[Step::Fixed(&["birchos_hashachar"])],
    },
    Section {
        name: "pesukei_dezimra",
        steps: &[Step::Variant(&PESUKEI_DEZIMRA)],
    },
    Section {
        name: "shema",
        steps: &[Step::Variant(&SHEMA_BLESSINGS), Step::Fixed(&["krias_shema"])],
    },
    Section {
        name: "amidah",
        steps: &[
            Step::Variant(&AMIDAH_SHACHARIS),
            Step::Stack(&SABBATH_IN_FESTIVAL),
            Step::Stack(&TEN_DAYS),
            Step::OneOf(&CHOL_HAMOED),
            Step::Stack(&DAY_INSERTIONS),
            Step::OneOf(&SEASONAL_PRAISE),
            Step::Stack(&RAIN_REQUEST),
        ],
    },
    Section {
        name: "hallel",
        steps: &[Step::OneOf(&HALLEL)],
    },
    Section {
        name: "tachanun",
        steps: &[Step::Stack(&PENITENTIAL)],
    },
    Section {
        name: "concluding",
        steps: &[
            Step::Fixed(&["ashrei", "uva_letzion", "aleinu"]),
            Step::Stack(&BORCHI_NAFSHI),
        ],
    },
];

static MINCHA: [Section; 4] = [
    Section {
        name: "ashrei",
        steps: &[Step::Fixed(&["ashrei"])],
    },
    Section {
        name: "amidah",
        steps: &[
            Step::Variant(&AMIDAH_MINCHA),
            Step::Stack(&SABBATH_IN_FESTIVAL),
            Step::Stack(&TEN_DAYS),
            Step::OneOf(&CHOL_HAMOED),
            Step::Stack(&DAY_INSERTIONS),
            Step::Stack(&ANEINU),
            Step::OneOf(&SEASONAL_PRAISE),
            Step::Stack(&RAIN_REQUEST),
        ],
    },
    Section {
        name: "tachanun",
        steps: &[Step::Stack(&PENITENTIAL)],
    },
    Section {
        name: "concluding",
        steps: &[Step::Fixed(&["aleinu"])],
    },
];

static MAARIV: [Section; 4] = [
    Section {
        name: "shema",
        steps: &[Step::Fixed(&["birchos_krias_shema_maariv", "krias_shema"])],
    },
    Section {
        name: "amidah",
        steps: &[
            Step::Variant(&AMIDAH_MAARIV),
            Step::Stack(&SABBATH_IN_FESTIVAL),
            Step::Stack(&TEN_DAYS),
            Step::OneOf(&CHOL_HAMOED),
            Step::Stack(&DAY_INSERTIONS),
            Step::OneOf(&SEASONAL_PRAISE),
            Step::Stack(&RAIN_REQUEST),
        ],
    },
    Section {
        name: "sefiras_haomer",
        steps: &[Step::Stack(&OMER)],
    },
    Section {
        name: "concluding",
        steps: &[Step::Fixed(&["aleinu"])],
    },
];

impl SectionTable {
    /// Shacharis, Mincha and Maariv.
    pub fn standard() -> Self {
        SectionTable::empty()
            .with(ServiceType::Shacharis, &SHACHARIS)
            .with(ServiceType::Mincha, &MINCHA)
            .with(ServiceType::Maariv, &MAARIV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_service() {
        let table = SectionTable::standard();
        for service in ServiceType::ALL {
            assert!(table.sections(service).is_some(), "{} missing", service);
        }
    }

    #[test]
    fn test_static_ids_include_seasonal_pair() {
        let ids = SectionTable::standard().static_chunk_ids(ServiceType::Maariv);
        assert!(ids.contains(&"mashiv_haruach"));
        assert!(ids.contains(&"morid_hatal"));
        assert!(!ids.iter().any(|id| id.starts_with("sefiras_haomer_day_")));
    }

    #[test]
    fn test_amidah_variants_end_with_unconditional_rule() {
        for rules in [&AMIDAH_SHACHARIS, &AMIDAH_MINCHA, &AMIDAH_MAARIV] {
            let last = rules[rules.len() - 1];
            assert_eq!(last.emit.static_ids(), &["amidah_weekday"]);
        }
    }
}
