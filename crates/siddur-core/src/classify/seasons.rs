//! Seasonal prayer windows.
//!
//! Two independent windows: the praise of rain in the second blessing, and the
//! request for rain in the ninth blessing of the weekday Amidah.

use crate::model::{CivilDate, LunarDate, LunarMonth};

/// Difference between the lunar year count and the civil year of its autumn.
const CIVIL_YEAR_OFFSET: i32 = 3_761;

/// Praise of rain: Shemini Atzeret (22 Tishrei) through 14 Nisan.
pub(crate) fn is_rain_season(lunar: &LunarDate) -> bool {
    match lunar.month {
        LunarMonth::Tishrei => lunar.day >= 22,
        LunarMonth::Nisan => lunar.day <= 14,
        LunarMonth::Cheshvan
        | LunarMonth::Kislev
        | LunarMonth::Tevet
        | LunarMonth::Shevat
        | LunarMonth::Adar
        | LunarMonth::AdarI
        | LunarMonth::AdarII => true,
        _ => false,
    }
}

/// Request for rain.
///
/// Locally it starts on 7 Cheshvan. In the diaspora it starts on the sixtieth
/// day after the autumn equinox of the Julian reckoning. Both end with 14
/// Nisan.
pub(crate) fn is_rain_request(lunar: &LunarDate, date: &CivilDate, diaspora: bool) -> bool {
    if !is_rain_season(lunar) {
        return false;
    }
    if lunar.month == LunarMonth::Nisan {
        return true;
    }
    if diaspora {
        date.day_number() >= diaspora_request_start(lunar.year - CIVIL_YEAR_OFFSET)
    } else {
        match lunar.month {
            LunarMonth::Tishrei => false,
            LunarMonth::Cheshvan => lunar.day >= 7,
            _ => true,
        }
    }
}

/// First civil day (as a day number) of the diaspora request in the autumn
/// of `civil_year`.
///
/// The request begins at the evening of Julian 21 November (22 November when
/// the next Julian year is a leap year); the following civil day is the first
/// full day carrying it.
pub(crate) fn diaspora_request_start(civil_year: i32) -> i64 {
    let day = if (civil_year + 1).rem_euclid(4) == 0 { 22 } else { 21 };
    fixed_from_julian(civil_year, 11, day) + 1
}

/// Day number of a Julian calendar date on the Gregorian day count.
pub(crate) fn fixed_from_julian(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let leap_adjust = if m <= 2 {
        0
    } else if y.rem_euclid(4) == 0 {
        -1
    } else {
        -2
    };
    -2 + 365 * (y - 1) + (y - 1).div_euclid(4) + (367 * m - 362).div_euclid(12) + leap_adjust
        + i64::from(day)
}
