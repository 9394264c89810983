//! Date classification.
//!
//! [`ConditionClassifier`] turns a civil date into a [`ConditionContext`]. It
//! is pure apart from its calendar provider and holds no mutable state.

mod holidays;
mod observances;
mod seasons;

use crate::calendar::{CalendarProvider, HebrewCalendar};
use crate::config::ClassifierConfig;
use crate::errors::{Result, SiddurError};
use crate::model::{
    CivilDate, ConditionContext, HolidayIdentity, LunarDate, LunarMonth, ServiceType,
};
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::Weekday;
use observances::DayStatus;

/// Classifies civil dates into liturgical conditions.
#[derive(Debug, Clone)]
pub struct ConditionClassifier<P> {
    provider: P,
    config: ClassifierConfig,
}

impl ConditionClassifier<HebrewCalendar> {
    /// Classifier over the built-in Hebrew calendar.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration fails validation.
    pub fn standard(config: ClassifierConfig) -> Result<Self> {
        Self::new(HebrewCalendar, config)
    }
}

impl<P: CalendarProvider> ConditionClassifier<P> {
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration fails validation.
    pub fn new(provider: P, config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify the lunar day that begins at dawn of `date`.
    ///
    /// # Errors
    ///
    /// `DateOutOfRange` outside the configured span; provider failures
    /// propagate as `CalendarProvider`.
    pub fn classify(&self, date: &CivilDate) -> Result<ConditionContext> {
        log_op_start!("classify", civil_date = %date);
        let start = std::time::Instant::now();

        let ctx = self
            .ensure_in_range(date)
            .and_then(|_| self.resolve(date))
            .map(|(_, ctx)| ctx)
            .map_err(|e| {
                log_op_error!(
                    "classify",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    civil_date = %date
                );
                e
            })?;

        log_op_end!(
            "classify",
            duration_ms = start.elapsed().as_millis() as u64,
            civil_date = %date,
            holiday = %ctx.holiday()
        );
        Ok(ctx)
    }

    /// Classify the conditions governing `service` prayed on `date`.
    ///
    /// Maariv is said after nightfall and so belongs to the next lunar day.
    /// Maariv of the eve and Shacharis keep the outgoing seasonal formula on
    /// the two days the formula changes mid-morning (Shemini Atzeret and the
    /// first day of Pesach).
    ///
    /// # Errors
    ///
    /// Same as [`ConditionClassifier::classify`].
    pub fn classify_for_service(
        &self,
        date: &CivilDate,
        service: ServiceType,
    ) -> Result<ConditionContext> {
        log_op_start!("classify_for_service", civil_date = %date, service = service.as_str());
        let start = std::time::Instant::now();

        let ctx = self.classify_for_service_impl(date, service).map_err(|e| {
            log_op_error!(
                "classify_for_service",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                civil_date = %date,
                service = service.as_str()
            );
            e
        })?;

        log_op_end!(
            "classify_for_service",
            duration_ms = start.elapsed().as_millis() as u64,
            civil_date = %date,
            service = service.as_str()
        );
        Ok(ctx)
    }

    fn classify_for_service_impl(
        &self,
        date: &CivilDate,
        service: ServiceType,
    ) -> Result<ConditionContext> {
        self.ensure_in_range(date)?;
        match service {
            ServiceType::Maariv => {
                let evening = date.succ().ok_or_else(|| out_of_calendar(date))?;
                let (lunar, ctx) = self.resolve(&evening)?;
                hold_outgoing_season(&lunar, ctx)
            }
            ServiceType::Shacharis => {
                let (lunar, ctx) = self.resolve(date)?;
                hold_outgoing_season(&lunar, ctx)
            }
            ServiceType::Mincha => self.resolve(date).map(|(_, ctx)| ctx),
        }
    }

    fn ensure_in_range(&self, date: &CivilDate) -> Result<()> {
        if self.config.contains(date) {
            Ok(())
        } else {
            Err(SiddurError::DateOutOfRange {
                date: date.to_string(),
                start: self.config.calendar_range_start.to_string(),
                end: self.config.calendar_range_end.to_string(),
            })
        }
    }

    /// Length of the month before the one `lunar` falls in.
    fn previous_month_length(&self, date: &CivilDate, lunar: &LunarDate) -> Result<u8> {
        let last_day = date
            .add_days(-i64::from(lunar.day))
            .ok_or_else(|| out_of_calendar(date))?;
        Ok(self.provider.to_lunar(&last_day)?.month_length)
    }

    fn resolve(&self, date: &CivilDate) -> Result<(LunarDate, ConditionContext)> {
        let diaspora = self.config.diaspora;
        let lunar = self.provider.to_lunar(date)?;

        let needs_previous = lunar.day == 1 || (lunar.month == LunarMonth::Tevet && lunar.day <= 8);
        let previous_length = if needs_previous {
            self.previous_month_length(date, &lunar)?
        } else {
            0
        };

        let festival = holidays::festival_for(&lunar, previous_length, diaspora);
        let is_sabbath = date.weekday() == Weekday::Sat;

        let rosh_chodesh_day_count = if lunar.day == 30 {
            2
        } else if lunar.day == 1 && lunar.month != LunarMonth::Tishrei {
            if previous_length == 30 {
                2
            } else {
                1
            }
        } else {
            0
        };

        let holiday = match festival.identity {
            HolidayIdentity::None if rosh_chodesh_day_count > 0 => HolidayIdentity::RoshChodesh,
            identity => identity,
        };

        let tisha_bav = observances::is_tisha_bav(&lunar, date.weekday());
        let tachanun = observances::says_tachanun(
            &lunar,
            &DayStatus {
                sabbath: is_sabbath,
                yom_tov: festival.yom_tov,
                chol_hamoed: festival.chol_hamoed,
                rosh_chodesh: rosh_chodesh_day_count > 0,
                tisha_bav,
                holiday,
            },
        );

        let ctx = ConditionContext::builder()
            .sabbath(is_sabbath)
            .yom_tov(festival.yom_tov)
            .chol_hamoed(festival.chol_hamoed)
            .holiday(holiday)
            .rosh_chodesh(rosh_chodesh_day_count)
            .aseret_yemei_teshuvah(lunar.month == LunarMonth::Tishrei && lunar.day <= 10)
            .rain_season(seasons::is_rain_season(&lunar))
            .rain_request(seasons::is_rain_request(&lunar, date, diaspora))
            .fast_day(observances::is_fast_day(&lunar, date.weekday()))
            .tisha_bav(tisha_bav)
            .omer_day(observances::omer_day(&lunar))
            .tachanun(tachanun)
            .build()?;

        Ok((lunar, ctx))
    }
}

/// The seasonal formula changes at Musaf of Shemini Atzeret and of the first
/// day of Pesach, so services before it keep the outgoing season.
fn hold_outgoing_season(lunar: &LunarDate, ctx: ConditionContext) -> Result<ConditionContext> {
    if lunar.is(LunarMonth::Tishrei, 22) {
        ctx.to_builder().rain_season(false).build()
    } else if lunar.is(LunarMonth::Nisan, 15) {
        ctx.to_builder().rain_season(true).build()
    } else {
        Ok(ctx)
    }
}

fn out_of_calendar(date: &CivilDate) -> SiddurError {
    SiddurError::CalendarProvider {
        date: date.to_string(),
        message: "neighbouring day is outside the civil calendar".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HallelLevel;

    fn classifier() -> ConditionClassifier<HebrewCalendar> {
        ConditionClassifier::standard(ClassifierConfig::default()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_rosh_hashana_first_day() {
        let ctx = classifier().classify(&date(2025, 9, 23)).unwrap();
        assert_eq!(ctx.holiday(), HolidayIdentity::RoshHashana);
        assert!(ctx.is_yom_tov());
        assert!(ctx.is_aseret_yemei_teshuvah());
        assert!(!ctx.is_rosh_chodesh());
        assert_eq!(ctx.hallel_level(), HallelLevel::None);
    }

    #[test]
    fn test_two_day_rosh_chodesh_tevet_on_chanukah() {
        let c = classifier();
        let first = c.classify(&date(2025, 12, 20)).unwrap();
        assert!(first.is_rosh_chodesh());
        assert!(first.is_sabbath());
        assert_eq!(first.rosh_chodesh_day_count(), 2);
        assert_eq!(first.holiday(), HolidayIdentity::Chanukah(6));

        let second = c.classify(&date(2025, 12, 21)).unwrap();
        assert_eq!(second.rosh_chodesh_day_count(), 2);
        assert_eq!(second.holiday(), HolidayIdentity::Chanukah(7));
        assert_eq!(second.hallel_level(), HallelLevel::Full);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = classifier().classify(&date(1899, 12, 31)).unwrap_err();
        assert!(matches!(err, SiddurError::DateOutOfRange { .. }));
    }

    #[test]
    fn test_maariv_uses_next_day() {
        // 2025-10-13 is 21 Tishrei; its evening is Shemini Atzeret
        let ctx = classifier()
            .classify_for_service(&date(2025, 10, 13), ServiceType::Maariv)
            .unwrap();
        assert_eq!(ctx.holiday(), HolidayIdentity::SheminiAtzeret);
    }

    #[test]
    fn test_maariv_of_switch_day_eve_keeps_outgoing_season() {
        let c = classifier();
        let shemini_eve = c
            .classify_for_service(&date(2025, 10, 13), ServiceType::Maariv)
            .unwrap();
        assert!(shemini_eve.seasonal_dew());

        let pesach_eve = c
            .classify_for_service(&date(2026, 4, 1), ServiceType::Maariv)
            .unwrap();
        assert_eq!(pesach_eve.holiday(), HolidayIdentity::Pesach(1));
        assert!(pesach_eve.seasonal_rain());
    }
}
