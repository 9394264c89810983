//! Liturgical condition model.
//!
//! A [`ConditionContext`] is the classifier's verdict for one lunar day. It is
//! built once through [`ConditionContextBuilder`] and never mutated.

use crate::errors::{Result, SiddurError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which holiday, if any, governs the day.
///
/// Day-bearing variants carry the 1-based day of the festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "day", rename_all = "snake_case")]
pub enum HolidayIdentity {
    #[default]
    None,
    RoshHashana,
    YomKippur,
    Sukkot(u8),
    SheminiAtzeret,
    SimchatTorah,
    Pesach(u8),
    Shavuot(u8),
    Chanukah(u8),
    Purim,
    ShushanPurim,
    RoshChodesh,
}

/// Day-less projection of [`HolidayIdentity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    None,
    RoshHashana,
    YomKippur,
    Sukkot,
    SheminiAtzeret,
    SimchatTorah,
    Pesach,
    Shavuot,
    Chanukah,
    Purim,
    ShushanPurim,
    RoshChodesh,
}

impl HolidayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKind::None => "none",
            HolidayKind::RoshHashana => "rosh_hashana",
            HolidayKind::YomKippur => "yom_kippur",
            HolidayKind::Sukkot => "sukkot",
            HolidayKind::SheminiAtzeret => "shemini_atzeret",
            HolidayKind::SimchatTorah => "simchat_torah",
            HolidayKind::Pesach => "pesach",
            HolidayKind::Shavuot => "shavuot",
            HolidayKind::Chanukah => "chanukah",
            HolidayKind::Purim => "purim",
            HolidayKind::ShushanPurim => "shushan_purim",
            HolidayKind::RoshChodesh => "rosh_chodesh",
        }
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HolidayIdentity {
    pub fn kind(&self) -> HolidayKind {
        match self {
            HolidayIdentity::None => HolidayKind::None,
            HolidayIdentity::RoshHashana => HolidayKind::RoshHashana,
            HolidayIdentity::YomKippur => HolidayKind::YomKippur,
            HolidayIdentity::Sukkot(_) => HolidayKind::Sukkot,
            HolidayIdentity::SheminiAtzeret => HolidayKind::SheminiAtzeret,
            HolidayIdentity::SimchatTorah => HolidayKind::SimchatTorah,
            HolidayIdentity::Pesach(_) => HolidayKind::Pesach,
            HolidayIdentity::Shavuot(_) => HolidayKind::Shavuot,
            HolidayIdentity::Chanukah(_) => HolidayKind::Chanukah,
            HolidayIdentity::Purim => HolidayKind::Purim,
            HolidayIdentity::ShushanPurim => HolidayKind::ShushanPurim,
            HolidayIdentity::RoshChodesh => HolidayKind::RoshChodesh,
        }
    }

    /// Festival day number for the day-bearing variants
    pub fn day(&self) -> Option<u8> {
        match self {
            HolidayIdentity::Sukkot(d)
            | HolidayIdentity::Pesach(d)
            | HolidayIdentity::Shavuot(d)
            | HolidayIdentity::Chanukah(d) => Some(*d),
            _ => None,
        }
    }

    /// Largest legal day number for a day-bearing variant
    fn max_day(&self) -> Option<u8> {
        match self {
            HolidayIdentity::Sukkot(_) => Some(7),
            HolidayIdentity::Pesach(_) | HolidayIdentity::Chanukah(_) => Some(8),
            HolidayIdentity::Shavuot(_) => Some(2),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        if let (Some(day), Some(max)) = (self.day(), self.max_day()) {
            if day == 0 || day > max {
                return Err(SiddurError::InvalidInput {
                    reason: format!("{} day {} is outside 1..={}", self.kind(), day, max),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for HolidayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day() {
            Some(day) => write!(f, "{}:{}", self.kind(), day),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// How much of Hallel is recited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallelLevel {
    None,
    Partial,
    Full,
}

impl HallelLevel {
    /// The only place Hallel is decided.
    ///
    /// Festival identity wins over Rosh Chodesh: Chanukah on Rosh Chodesh
    /// Tevet is still Full.
    pub fn derive(holiday: HolidayIdentity, is_rosh_chodesh: bool, is_chol_hamoed: bool) -> Self {
        match holiday {
            HolidayIdentity::Chanukah(_)
            | HolidayIdentity::Sukkot(_)
            | HolidayIdentity::SheminiAtzeret
            | HolidayIdentity::SimchatTorah
            | HolidayIdentity::Shavuot(_) => HallelLevel::Full,
            HolidayIdentity::Pesach(day) if day <= 2 && !is_chol_hamoed => HallelLevel::Full,
            HolidayIdentity::Pesach(_) => HallelLevel::Partial,
            _ if is_rosh_chodesh => HallelLevel::Partial,
            _ => HallelLevel::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HallelLevel::None => "none",
            HallelLevel::Partial => "partial",
            HallelLevel::Full => "full",
        }
    }
}

/// Structured liturgical conditions for one lunar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConditionContext {
    is_sabbath: bool,
    is_yom_tov: bool,
    is_chol_hamoed: bool,
    holiday: HolidayIdentity,
    is_rosh_chodesh: bool,
    rosh_chodesh_day_count: u8,
    is_aseret_yemei_teshuvah: bool,
    seasonal_rain: bool,
    seasonal_dew: bool,
    hallel_level: HallelLevel,
    rain_request: bool,
    is_fast_day: bool,
    is_tisha_bav: bool,
    omer_day: u8,
    tachanun: bool,
}

impl ConditionContext {
    pub fn builder() -> ConditionContextBuilder {
        ConditionContextBuilder::default()
    }

    /// Re-open this context for a modified copy
    pub fn to_builder(&self) -> ConditionContextBuilder {
        ConditionContextBuilder {
            is_sabbath: self.is_sabbath,
            is_yom_tov: self.is_yom_tov,
            is_chol_hamoed: self.is_chol_hamoed,
            holiday: self.holiday,
            rosh_chodesh_day_count: self.rosh_chodesh_day_count,
            is_aseret_yemei_teshuvah: self.is_aseret_yemei_teshuvah,
            seasonal_rain: self.seasonal_rain,
            seasonal_dew: self.seasonal_dew,
            rain_request: self.rain_request,
            is_fast_day: self.is_fast_day,
            is_tisha_bav: self.is_tisha_bav,
            omer_day: self.omer_day,
            tachanun: self.tachanun,
        }
    }

    pub fn is_sabbath(&self) -> bool {
        self.is_sabbath
    }

    pub fn is_yom_tov(&self) -> bool {
        self.is_yom_tov
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.is_chol_hamoed
    }

    pub fn holiday(&self) -> HolidayIdentity {
        self.holiday
    }

    pub fn is_rosh_chodesh(&self) -> bool {
        self.is_rosh_chodesh
    }

    /// 1 or 2 on Rosh Chodesh, 0 otherwise
    pub fn rosh_chodesh_day_count(&self) -> u8 {
        self.rosh_chodesh_day_count
    }

    pub fn is_aseret_yemei_teshuvah(&self) -> bool {
        self.is_aseret_yemei_teshuvah
    }

    pub fn seasonal_rain(&self) -> bool {
        self.seasonal_rain
    }

    pub fn seasonal_dew(&self) -> bool {
        self.seasonal_dew
    }

    pub fn hallel_level(&self) -> HallelLevel {
        self.hallel_level
    }

    pub fn rain_request(&self) -> bool {
        self.rain_request
    }

    pub fn is_fast_day(&self) -> bool {
        self.is_fast_day
    }

    /// The Ninth of Av, or the tenth when the fast is moved off the Sabbath
    pub fn is_tisha_bav(&self) -> bool {
        self.is_tisha_bav
    }

    /// Day of the Omer count, 0 outside it
    pub fn omer_day(&self) -> u8 {
        self.omer_day
    }

    pub fn tachanun(&self) -> bool {
        self.tachanun
    }
}

/// Builder for [`ConditionContext`].
///
/// Defaults describe an ordinary weekday in the dew season. `hallel_level` is
/// never set directly; `build` derives it.
#[derive(Debug, Clone)]
pub struct ConditionContextBuilder {
    is_sabbath: bool,
    is_yom_tov: bool,
    is_chol_hamoed: bool,
    holiday: HolidayIdentity,
    rosh_chodesh_day_count: u8,
    is_aseret_yemei_teshuvah: bool,
    seasonal_rain: bool,
    seasonal_dew: bool,
    rain_request: bool,
    is_fast_day: bool,
    is_tisha_bav: bool,
    omer_day: u8,
    tachanun: bool,
}

impl Default for ConditionContextBuilder {
    fn default() -> Self {
        Self {
            is_sabbath: false,
            is_yom_tov: false,
            is_chol_hamoed: false,
            holiday: HolidayIdentity::None,
            rosh_chodesh_day_count: 0,
            is_aseret_yemei_teshuvah: false,
            seasonal_rain: false,
            seasonal_dew: true,
            rain_request: false,
            is_fast_day: false,
            is_tisha_bav: false,
            omer_day: 0,
            tachanun: false,
        }
    }
}

impl ConditionContextBuilder {
    pub fn sabbath(mut self, value: bool) -> Self {
        self.is_sabbath = value;
        self
    }

    pub fn yom_tov(mut self, value: bool) -> Self {
        self.is_yom_tov = value;
        self
    }

    pub fn chol_hamoed(mut self, value: bool) -> Self {
        self.is_chol_hamoed = value;
        self
    }

    pub fn holiday(mut self, holiday: HolidayIdentity) -> Self {
        self.holiday = holiday;
        self
    }

    /// Mark Rosh Chodesh with its length in days; 0 clears it
    pub fn rosh_chodesh(mut self, day_count: u8) -> Self {
        self.rosh_chodesh_day_count = day_count;
        self
    }

    pub fn aseret_yemei_teshuvah(mut self, value: bool) -> Self {
        self.is_aseret_yemei_teshuvah = value;
        self
    }

    /// Select the rain season (`true`) or the dew season (`false`)
    pub fn rain_season(mut self, rain: bool) -> Self {
        self.seasonal_rain = rain;
        self.seasonal_dew = !rain;
        self
    }

    /// Set both seasonal flags independently; `build` rejects anything but
    /// exactly one of them
    pub fn seasonal_flags(mut self, rain: bool, dew: bool) -> Self {
        self.seasonal_rain = rain;
        self.seasonal_dew = dew;
        self
    }

    pub fn rain_request(mut self, value: bool) -> Self {
        self.rain_request = value;
        self
    }

    pub fn fast_day(mut self, value: bool) -> Self {
        self.is_fast_day = value;
        self
    }

    /// Mark the Tisha b'Av fast; requires `fast_day`
    pub fn tisha_bav(mut self, value: bool) -> Self {
        self.is_tisha_bav = value;
        self
    }

    pub fn omer_day(mut self, day: u8) -> Self {
        self.omer_day = day;
        self
    }

    pub fn tachanun(mut self, value: bool) -> Self {
        self.tachanun = value;
        self
    }

    /// Validate and freeze.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the seasonal flags are not exclusive, Yom Tov and
    /// Chol Hamoed coincide, a festival day number is out of range, the
    /// Rosh Chodesh count exceeds 2, the identity says Rosh Chodesh without
    /// a count, the Omer day exceeds 49, Tisha b'Av is not a fast day, or
    /// Tachanun is requested on a Sabbath, Yom Tov, Chol Hamoed or Rosh
    /// Chodesh.
    pub fn build(self) -> Result<ConditionContext> {
        let invalid = |reason: &str| SiddurError::InvalidInput {
            reason: reason.to_string(),
        };

        if self.seasonal_rain == self.seasonal_dew {
            return Err(invalid("exactly one of seasonal_rain and seasonal_dew must hold"));
        }
        if self.is_yom_tov && self.is_chol_hamoed {
            return Err(invalid("a day cannot be both Yom Tov and Chol Hamoed"));
        }
        if self.rosh_chodesh_day_count > 2 {
            return Err(invalid("rosh_chodesh_day_count must be 0, 1 or 2"));
        }
        if self.holiday == HolidayIdentity::RoshChodesh && self.rosh_chodesh_day_count == 0 {
            return Err(invalid("RoshChodesh identity requires is_rosh_chodesh"));
        }
        if self.omer_day > 49 {
            return Err(invalid("omer_day must be within 0..=49"));
        }
        if self.is_tisha_bav && !self.is_fast_day {
            return Err(invalid("tisha_bav requires fast_day"));
        }
        let rest_day = self.is_sabbath
            || self.is_yom_tov
            || self.is_chol_hamoed
            || self.rosh_chodesh_day_count > 0;
        if self.tachanun && rest_day {
            return Err(invalid(
                "tachanun is not said on Sabbath, Yom Tov, Chol Hamoed or Rosh Chodesh",
            ));
        }
        self.holiday.validate()?;

        let is_rosh_chodesh = self.rosh_chodesh_day_count > 0;
        Ok(ConditionContext {
            is_sabbath: self.is_sabbath,
            is_yom_tov: self.is_yom_tov,
            is_chol_hamoed: self.is_chol_hamoed,
            holiday: self.holiday,
            is_rosh_chodesh,
            rosh_chodesh_day_count: self.rosh_chodesh_day_count,
            is_aseret_yemei_teshuvah: self.is_aseret_yemei_teshuvah,
            seasonal_rain: self.seasonal_rain,
            seasonal_dew: self.seasonal_dew,
            hallel_level: HallelLevel::derive(self.holiday, is_rosh_chodesh, self.is_chol_hamoed),
            rain_request: self.rain_request,
            is_fast_day: self.is_fast_day,
            is_tisha_bav: self.is_tisha_bav,
            omer_day: self.omer_day,
            tachanun: self.tachanun,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_is_plain_weekday() {
        let ctx = ConditionContext::builder().build().unwrap();
        assert!(!ctx.is_sabbath());
        assert!(ctx.seasonal_dew());
        assert!(!ctx.seasonal_rain());
        assert_eq!(ctx.hallel_level(), HallelLevel::None);
        assert_eq!(ctx.holiday(), HolidayIdentity::None);
    }

    #[test]
    fn test_both_seasons_rejected() {
        let err = ConditionContext::builder()
            .seasonal_flags(true, true)
            .build()
            .unwrap_err();
        assert!(matches!(err, SiddurError::InvalidInput { .. }));

        let err = ConditionContext::builder()
            .seasonal_flags(false, false)
            .build()
            .unwrap_err();
        assert!(matches!(err, SiddurError::InvalidInput { .. }));
    }

    #[test]
    fn test_yom_tov_and_chol_hamoed_rejected() {
        let result = ConditionContext::builder()
            .yom_tov(true)
            .chol_hamoed(true)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_festival_day_bounds() {
        assert!(ConditionContext::builder()
            .holiday(HolidayIdentity::Sukkot(8))
            .build()
            .is_err());
        assert!(ConditionContext::builder()
            .holiday(HolidayIdentity::Chanukah(0))
            .build()
            .is_err());
        assert!(ConditionContext::builder()
            .holiday(HolidayIdentity::Pesach(8))
            .yom_tov(true)
            .build()
            .is_ok());
    }

    #[test]
    fn test_rosh_chodesh_identity_requires_flag() {
        assert!(ConditionContext::builder()
            .holiday(HolidayIdentity::RoshChodesh)
            .build()
            .is_err());
        let ctx = ConditionContext::builder()
            .holiday(HolidayIdentity::RoshChodesh)
            .rosh_chodesh(2)
            .build()
            .unwrap();
        assert!(ctx.is_rosh_chodesh());
        assert_eq!(ctx.rosh_chodesh_day_count(), 2);
    }

    #[test]
    fn test_hallel_derivation_table() {
        use HallelLevel::*;
        use HolidayIdentity as H;

        let cases = [
            (H::Chanukah(3), false, false, Full),
            (H::Chanukah(6), true, false, Full),
            (H::Sukkot(1), false, false, Full),
            (H::Sukkot(4), false, true, Full),
            (H::SheminiAtzeret, false, false, Full),
            (H::SimchatTorah, false, false, Full),
            (H::Shavuot(2), false, false, Full),
            (H::Pesach(1), false, false, Full),
            (H::Pesach(2), false, false, Full),
            (H::Pesach(2), false, true, Partial),
            (H::Pesach(5), false, true, Partial),
            (H::Pesach(8), false, false, Partial),
            (H::RoshChodesh, true, false, Partial),
            (H::None, true, false, Partial),
            (H::RoshHashana, false, false, None),
            (H::YomKippur, false, false, None),
            (H::Purim, false, false, None),
            (H::None, false, false, None),
        ];
        for (holiday, rc, chm, expected) in cases {
            assert_eq!(
                HallelLevel::derive(holiday, rc, chm),
                expected,
                "{:?} rc={} chm={}",
                holiday,
                rc,
                chm
            );
        }
    }

    #[test]
    fn test_to_builder_preserves_fields() {
        let ctx = ConditionContext::builder()
            .sabbath(true)
            .holiday(HolidayIdentity::Chanukah(1))
            .rain_season(true)
            .rain_request(true)
            .build()
            .unwrap();
        let copy = ctx.to_builder().build().unwrap();
        assert_eq!(ctx, copy);
    }

    #[test]
    fn test_tachanun_rejected_on_rest_days() {
        let rest_days = [
            ConditionContext::builder().sabbath(true),
            ConditionContext::builder().yom_tov(true),
            ConditionContext::builder().chol_hamoed(true),
            ConditionContext::builder().rosh_chodesh(1),
        ];
        for builder in rest_days {
            let err = builder.tachanun(true).build().unwrap_err();
            assert!(matches!(err, SiddurError::InvalidInput { .. }));
        }
        assert!(ConditionContext::builder().tachanun(true).build().is_ok());
    }

    #[test]
    fn test_tisha_bav_requires_fast_day() {
        assert!(ConditionContext::builder().tisha_bav(true).build().is_err());
        let ctx = ConditionContext::builder()
            .fast_day(true)
            .tisha_bav(true)
            .build()
            .unwrap();
        assert!(ctx.is_tisha_bav());
    }

    #[test]
    fn test_holiday_identity_display() {
        assert_eq!(HolidayIdentity::Pesach(3).to_string(), "pesach:3");
        assert_eq!(HolidayIdentity::Purim.to_string(), "purim");
    }
}
