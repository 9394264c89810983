//! Hebrew calendar backed by `icu_calendar`.
//!
//! The conversion itself lives in the ICU crate; this module maps its
//! Tishrei-based month ordinals onto [`LunarMonth`] and enforces the span of
//! lunar years the classifier accepts.

use super::CalendarProvider;
use crate::errors::{Result, SiddurError};
use crate::model::{CivilDate, LunarDate, LunarMonth};
use chrono::Datelike;
use icu_calendar::hebrew::Hebrew;
use icu_calendar::Date;

/// Earliest lunar year converted.
pub const MIN_YEAR: i32 = 3_762;

/// Latest lunar year converted.
pub const MAX_YEAR: i32 = 13_760;

/// Hebrew calendar provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HebrewCalendar;

impl HebrewCalendar {
    pub fn new() -> Self {
        Self
    }

    /// Civil date of 1 Tishrei of `year`, when the year is in range.
    pub fn new_year(year: i32) -> Option<CivilDate> {
        if !(MIN_YEAR..=MAX_YEAR + 1).contains(&year) {
            return None;
        }
        let iso = Date::try_new_hebrew_date(year, 1, 1).ok()?.to_iso();
        CivilDate::from_ymd(
            iso.year().number,
            iso.month().ordinal,
            iso.day_of_month().0,
        )
    }

    /// Leap years carry Adar I and Adar II.
    pub fn is_leap_year(year: i32) -> bool {
        Date::try_new_hebrew_date(year, 1, 1)
            .map(|date| date.is_in_leap_year())
            .unwrap_or(false)
    }
}

/// Month for a Tishrei-based ordinal as ICU numbers them.
fn month_from_ordinal(ordinal: u32, leap_year: bool) -> Option<LunarMonth> {
    let month = match (ordinal, leap_year) {
        (1, _) => LunarMonth::Tishrei,
        (2, _) => LunarMonth::Cheshvan,
        (3, _) => LunarMonth::Kislev,
        (4, _) => LunarMonth::Tevet,
        (5, _) => LunarMonth::Shevat,
        (6, false) => LunarMonth::Adar,
        (6, true) => LunarMonth::AdarI,
        (7, true) => LunarMonth::AdarII,
        (n, false) if (7..=12).contains(&n) => LunarMonth::from_number(n as u8 - 6, false)?,
        (n, true) if (8..=13).contains(&n) => LunarMonth::from_number(n as u8 - 7, true)?,
        _ => return None,
    };
    Some(month)
}

fn provider_error(date: &CivilDate, message: String) -> SiddurError {
    SiddurError::CalendarProvider {
        date: date.to_string(),
        message,
    }
}

impl CalendarProvider for HebrewCalendar {
    fn to_lunar(&self, date: &CivilDate) -> Result<LunarDate> {
        let naive = date.naive();
        let iso = Date::try_new_iso_date(naive.year(), naive.month() as u8, naive.day() as u8)
            .map_err(|e| provider_error(date, e.to_string()))?;
        let hebrew = iso.to_calendar(Hebrew);

        let year = hebrew.year().number;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(provider_error(
                date,
                format!(
                    "lunar year {} outside the supported span {}..={}",
                    year, MIN_YEAR, MAX_YEAR
                ),
            ));
        }

        let ordinal = hebrew.month().ordinal;
        let month = month_from_ordinal(ordinal, hebrew.is_in_leap_year()).ok_or_else(|| {
            provider_error(
                date,
                format!("month ordinal {} does not exist in year {}", ordinal, year),
            )
        })?;

        Ok(LunarDate {
            year,
            month,
            day: hebrew.day_of_month().0 as u8,
            month_length: hebrew.days_in_month(),
        })
    }
}
