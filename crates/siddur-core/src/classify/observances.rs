//! Fast days, the Omer count and Tachanun.

use crate::model::{HolidayIdentity, LunarDate, LunarMonth};
use chrono::Weekday;

/// Public fast days, with a fast that falls on the Sabbath moved to Sunday
/// (Thursday for the Fast of Esther).
pub(crate) fn is_fast_day(lunar: &LunarDate, weekday: Weekday) -> bool {
    let sabbath = weekday == Weekday::Sat;
    let sunday = weekday == Weekday::Sun;
    match (lunar.month, lunar.day) {
        (LunarMonth::Tishrei, 3) => !sabbath,
        (LunarMonth::Tishrei, 4) => sunday,
        (LunarMonth::Tevet, 10) => true,
        (LunarMonth::Tammuz, 17) => !sabbath,
        (LunarMonth::Tammuz, 18) => sunday,
        (LunarMonth::Av, 9 | 10) => is_tisha_bav(lunar, weekday),
        (month, 13) if month.is_purim_adar() => !sabbath,
        (month, 11) if month.is_purim_adar() => weekday == Weekday::Thu,
        _ => false,
    }
}

/// The Ninth of Av fast, observed on the tenth when the ninth is a Sabbath.
pub(crate) fn is_tisha_bav(lunar: &LunarDate, weekday: Weekday) -> bool {
    match (lunar.month, lunar.day) {
        (LunarMonth::Av, 9) => weekday != Weekday::Sat,
        (LunarMonth::Av, 10) => weekday == Weekday::Sun,
        _ => false,
    }
}

/// Day of the Omer: 16 Nisan is day 1, 5 Sivan is day 49.
pub(crate) fn omer_day(lunar: &LunarDate) -> u8 {
    match lunar.month {
        LunarMonth::Nisan if lunar.day >= 16 => lunar.day - 15,
        LunarMonth::Iyar => 15 + lunar.day,
        LunarMonth::Sivan if lunar.day <= 5 => 44 + lunar.day,
        _ => 0,
    }
}

/// Inputs to the Tachanun decision that the calendar alone cannot give.
pub(crate) struct DayStatus {
    pub sabbath: bool,
    pub yom_tov: bool,
    pub chol_hamoed: bool,
    pub rosh_chodesh: bool,
    pub tisha_bav: bool,
    pub holiday: HolidayIdentity,
}

/// Whether the weekday penitential prayers are said.
pub(crate) fn says_tachanun(lunar: &LunarDate, status: &DayStatus) -> bool {
    if status.sabbath
        || status.yom_tov
        || status.chol_hamoed
        || status.rosh_chodesh
        || status.tisha_bav
    {
        return false;
    }
    if matches!(
        status.holiday,
        HolidayIdentity::Chanukah(_) | HolidayIdentity::Purim | HolidayIdentity::ShushanPurim
    ) {
        return false;
    }
    let day = lunar.day;
    let excluded = match lunar.month {
        LunarMonth::Nisan => true,
        LunarMonth::Iyar => day == 14 || day == 18,
        LunarMonth::Sivan => day <= 12,
        LunarMonth::Av => day == 9 || day == 15,
        LunarMonth::Elul => day == 29,
        LunarMonth::Tishrei => day >= 9,
        LunarMonth::Shevat => day == 15,
        LunarMonth::AdarI => day == 14 || day == 15,
        _ => false,
    };
    !excluded
}
