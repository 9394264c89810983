//! Civil and lunar date value types.

use crate::errors::SiddurError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A civil (Gregorian) calendar day.
///
/// Serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day; `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Build from a count of days where 0001-01-01 is day 1.
    pub fn from_day_number(day_number: i64) -> Option<Self> {
        i32::try_from(day_number)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Days since the proleptic Gregorian epoch (0001-01-01 is day 1).
    pub fn day_number(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Shift by a signed number of days; `None` past chrono's range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CivilDate {
    type Err = SiddurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| SiddurError::InvalidInput {
                reason: format!("invalid civil date '{}': {}", s, e),
            })
    }
}

/// Months of the lunar year.
///
/// Common years have a single `Adar`; leap years have `AdarI` and `AdarII`
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarMonth {
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
}

impl LunarMonth {
    /// Month index counted from Nisan = 1; Adar and Adar I share 12.
    pub fn number(&self) -> u8 {
        match self {
            LunarMonth::Nisan => 1,
            LunarMonth::Iyar => 2,
            LunarMonth::Sivan => 3,
            LunarMonth::Tammuz => 4,
            LunarMonth::Av => 5,
            LunarMonth::Elul => 6,
            LunarMonth::Tishrei => 7,
            LunarMonth::Cheshvan => 8,
            LunarMonth::Kislev => 9,
            LunarMonth::Tevet => 10,
            LunarMonth::Shevat => 11,
            LunarMonth::Adar | LunarMonth::AdarI => 12,
            LunarMonth::AdarII => 13,
        }
    }

    /// Inverse of [`LunarMonth::number`]; the leap flag picks between
    /// `Adar` and `AdarI` for month 12.
    pub fn from_number(number: u8, leap_year: bool) -> Option<Self> {
        let month = match number {
            1 => LunarMonth::Nisan,
            2 => LunarMonth::Iyar,
            3 => LunarMonth::Sivan,
            4 => LunarMonth::Tammuz,
            5 => LunarMonth::Av,
            6 => LunarMonth::Elul,
            7 => LunarMonth::Tishrei,
            8 => LunarMonth::Cheshvan,
            9 => LunarMonth::Kislev,
            10 => LunarMonth::Tevet,
            11 => LunarMonth::Shevat,
            12 if leap_year => LunarMonth::AdarI,
            12 => LunarMonth::Adar,
            13 if leap_year => LunarMonth::AdarII,
            _ => return None,
        };
        Some(month)
    }

    /// The Adar in which Purim falls (Adar in common years, Adar II in leap years).
    pub fn is_purim_adar(&self) -> bool {
        matches!(self, LunarMonth::Adar | LunarMonth::AdarII)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LunarMonth::Nisan => "Nisan",
            LunarMonth::Iyar => "Iyar",
            LunarMonth::Sivan => "Sivan",
            LunarMonth::Tammuz => "Tammuz",
            LunarMonth::Av => "Av",
            LunarMonth::Elul => "Elul",
            LunarMonth::Tishrei => "Tishrei",
            LunarMonth::Cheshvan => "Cheshvan",
            LunarMonth::Kislev => "Kislev",
            LunarMonth::Tevet => "Tevet",
            LunarMonth::Shevat => "Shevat",
            LunarMonth::Adar => "Adar",
            LunarMonth::AdarI => "Adar I",
            LunarMonth::AdarII => "Adar II",
        }
    }
}

impl fmt::Display for LunarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Year counted from creation (e.g. 5786)
    pub year: i32,
    pub month: LunarMonth,
    /// Day of month, 1..=30
    pub day: u8,
    /// Length of `month` in this year, 29 or 30
    pub month_length: u8,
}

impl LunarDate {
    pub fn is(&self, month: LunarMonth, day: u8) -> bool {
        self.month == month && self.day == day
    }

    /// Whether this is the last day of its month
    pub fn is_last_day(&self) -> bool {
        self.day == self.month_length
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_date_parse_and_display() {
        let date: CivilDate = "2025-10-07".parse().unwrap();
        assert_eq!(date.to_string(), "2025-10-07");
        assert_eq!(date.weekday(), Weekday::Tue);
    }

    #[test]
    fn test_civil_date_parse_rejects_garbage() {
        let err = "2025-13-40".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, SiddurError::InvalidInput { .. }));
    }

    #[test]
    fn test_day_number_round_trip_at_epoch() {
        let epoch = CivilDate::from_ymd(1, 1, 1).unwrap();
        assert_eq!(epoch.day_number(), 1);
        assert_eq!(CivilDate::from_day_number(1), Some(epoch));
    }

    #[test]
    fn test_month_numbering_in_leap_and_common_years() {
        assert_eq!(LunarMonth::from_number(12, false), Some(LunarMonth::Adar));
        assert_eq!(LunarMonth::from_number(12, true), Some(LunarMonth::AdarI));
        assert_eq!(LunarMonth::from_number(13, true), Some(LunarMonth::AdarII));
        assert_eq!(LunarMonth::from_number(13, false), None);
        assert_eq!(LunarMonth::AdarII.number(), 13);
        assert!(LunarMonth::AdarII.is_purim_adar());
        assert!(!LunarMonth::AdarI.is_purim_adar());
    }
}
