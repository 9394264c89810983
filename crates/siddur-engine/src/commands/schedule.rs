//! Playback scheduling.
//!
//! Recordings are only played automatically on days when the listener
//! cannot operate a device.

use siddur_core::calendar::CalendarProvider;
use siddur_core::errors::{ExError, ExErrorKind};
use siddur_core::{CivilDate, ConditionClassifier, ConditionContext, ServiceType};
use siddur_store::errors::Result;

pub fn is_shabbos_or_yom_tov(ctx: &ConditionContext) -> bool {
    ctx.is_sabbath() || ctx.is_yom_tov()
}

/// Service to play at `hour` (0..=23) on `date`, or `None` on an ordinary day.
///
/// # Errors
///
/// `InvalidInput` for an hour past 23; classification errors propagate.
pub fn should_play<P: CalendarProvider>(
    classifier: &ConditionClassifier<P>,
    date: &CivilDate,
    hour: u32,
) -> Result<Option<ServiceType>> {
    if hour > 23 {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("should_play")
            .with_civil_date(date.to_string())
            .with_message(format!("hour {} is not in 0..=23", hour)));
    }

    let ctx = classifier
        .classify(date)
        .map_err(|e| ExError::from(e).with_op("should_play"))?;

    if is_shabbos_or_yom_tov(&ctx) {
        Ok(Some(ServiceType::for_hour(hour)))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siddur_core::ClassifierConfig;

    fn classifier() -> ConditionClassifier<siddur_core::HebrewCalendar> {
        ConditionClassifier::standard(ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_ordinary_weekday_is_silent() {
        // Wednesday, 7 Cheshvan 5786
        let date = CivilDate::from_ymd(2025, 10, 29).unwrap();
        assert_eq!(should_play(&classifier(), &date, 9).unwrap(), None);
    }

    #[test]
    fn test_sabbath_morning_plays_shacharis() {
        let date = CivilDate::from_ymd(2026, 5, 23).unwrap();
        assert_eq!(
            should_play(&classifier(), &date, 9).unwrap(),
            Some(ServiceType::Shacharis)
        );
    }

    #[test]
    fn test_hour_out_of_range() {
        let date = CivilDate::from_ymd(2026, 5, 23).unwrap();
        let err = should_play(&classifier(), &date, 24).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
