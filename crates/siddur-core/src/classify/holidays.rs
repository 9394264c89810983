//! Festival table keyed by lunar month and day.

use crate::model::{HolidayIdentity, LunarDate, LunarMonth};

/// Festival verdict for one lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FestivalDay {
    pub identity: HolidayIdentity,
    pub yom_tov: bool,
    pub chol_hamoed: bool,
}

impl FestivalDay {
    const NONE: FestivalDay = FestivalDay {
        identity: HolidayIdentity::None,
        yom_tov: false,
        chol_hamoed: false,
    };

    fn yom_tov(identity: HolidayIdentity) -> Self {
        Self {
            identity,
            yom_tov: true,
            chol_hamoed: false,
        }
    }

    fn chol_hamoed(identity: HolidayIdentity) -> Self {
        Self {
            identity,
            yom_tov: false,
            chol_hamoed: true,
        }
    }

    fn minor(identity: HolidayIdentity) -> Self {
        Self {
            identity,
            yom_tov: false,
            chol_hamoed: false,
        }
    }
}

/// Look up the festival for a lunar day.
///
/// `kislev_length` is only consulted in Tevet, to continue the Chanukah count
/// across the month boundary.
pub(crate) fn festival_for(lunar: &LunarDate, kislev_length: u8, diaspora: bool) -> FestivalDay {
    let day = lunar.day;
    match lunar.month {
        LunarMonth::Tishrei => match day {
            1 | 2 => FestivalDay::yom_tov(HolidayIdentity::RoshHashana),
            10 => FestivalDay::yom_tov(HolidayIdentity::YomKippur),
            15..=21 => {
                let sukkot_day = day - 14;
                let identity = HolidayIdentity::Sukkot(sukkot_day);
                if sukkot_day == 1 || (diaspora && sukkot_day == 2) {
                    FestivalDay::yom_tov(identity)
                } else {
                    FestivalDay::chol_hamoed(identity)
                }
            }
            22 => FestivalDay::yom_tov(HolidayIdentity::SheminiAtzeret),
            23 if diaspora => FestivalDay::yom_tov(HolidayIdentity::SimchatTorah),
            _ => FestivalDay::NONE,
        },
        LunarMonth::Kislev if day >= 25 => FestivalDay::minor(HolidayIdentity::Chanukah(day - 24)),
        LunarMonth::Tevet => {
            let chanukah_day = kislev_length.saturating_sub(24) + day;
            if chanukah_day <= 8 {
                FestivalDay::minor(HolidayIdentity::Chanukah(chanukah_day))
            } else {
                FestivalDay::NONE
            }
        }
        month if month.is_purim_adar() => match day {
            14 => FestivalDay::minor(HolidayIdentity::Purim),
            15 => FestivalDay::minor(HolidayIdentity::ShushanPurim),
            _ => FestivalDay::NONE,
        },
        LunarMonth::Nisan => {
            let last = if diaspora { 22 } else { 21 };
            if !(15..=last).contains(&day) {
                return FestivalDay::NONE;
            }
            let pesach_day = day - 14;
            let identity = HolidayIdentity::Pesach(pesach_day);
            let yom_tov = if diaspora {
                matches!(pesach_day, 1 | 2 | 7 | 8)
            } else {
                matches!(pesach_day, 1 | 7)
            };
            if yom_tov {
                FestivalDay::yom_tov(identity)
            } else {
                FestivalDay::chol_hamoed(identity)
            }
        }
        LunarMonth::Sivan => match day {
            6 => FestivalDay::yom_tov(HolidayIdentity::Shavuot(1)),
            7 if diaspora => FestivalDay::yom_tov(HolidayIdentity::Shavuot(2)),
            _ => FestivalDay::NONE,
        },
        _ => FestivalDay::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(month: LunarMonth, day: u8) -> LunarDate {
        LunarDate {
            year: 5786,
            month,
            day,
            month_length: 30,
        }
    }

    #[test]
    fn test_sukkot_second_day_depends_on_locale() {
        let second = on(LunarMonth::Tishrei, 16);
        assert!(festival_for(&second, 30, true).yom_tov);
        let local = festival_for(&second, 30, false);
        assert!(local.chol_hamoed);
        assert_eq!(local.identity, HolidayIdentity::Sukkot(2));
    }

    #[test]
    fn test_simchat_torah_only_in_diaspora() {
        let day = on(LunarMonth::Tishrei, 23);
        assert_eq!(
            festival_for(&day, 30, true).identity,
            HolidayIdentity::SimchatTorah
        );
        assert_eq!(festival_for(&day, 30, false), FestivalDay::NONE);
    }

    #[test]
    fn test_chanukah_crosses_into_tevet() {
        // Full Kislev: 25..30 are days 1..6, Tevet 1..2 are days 7..8
        assert_eq!(
            festival_for(&on(LunarMonth::Tevet, 2), 30, true).identity,
            HolidayIdentity::Chanukah(8)
        );
        assert_eq!(
            festival_for(&on(LunarMonth::Tevet, 3), 30, true),
            FestivalDay::NONE
        );
        // Short Kislev: Tevet 3 is the eighth day
        assert_eq!(
            festival_for(&on(LunarMonth::Tevet, 3), 29, true).identity,
            HolidayIdentity::Chanukah(8)
        );
    }

    #[test]
    fn test_pesach_length_and_yom_tov_days() {
        let eighth = on(LunarMonth::Nisan, 22);
        assert_eq!(
            festival_for(&eighth, 30, true),
            FestivalDay::yom_tov(HolidayIdentity::Pesach(8))
        );
        assert_eq!(festival_for(&eighth, 30, false), FestivalDay::NONE);

        let second = on(LunarMonth::Nisan, 16);
        assert!(festival_for(&second, 30, true).yom_tov);
        assert!(festival_for(&second, 30, false).chol_hamoed);
    }

    #[test]
    fn test_purim_not_in_adar_i() {
        assert_eq!(
            festival_for(&on(LunarMonth::AdarI, 14), 30, true),
            FestivalDay::NONE
        );
        assert_eq!(
            festival_for(&on(LunarMonth::AdarII, 14), 30, true).identity,
            HolidayIdentity::Purim
        );
    }
}
