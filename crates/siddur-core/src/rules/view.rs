//! Read-tracking access to a [`ConditionContext`].

use crate::model::{ConditionContext, HallelLevel, HolidayIdentity, HolidayKind};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A condition field a rule can consult.
///
/// Declaration order is the canonical order used by plan signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Sabbath,
    YomTov,
    CholHamoed,
    HolidayKind,
    HolidayDay,
    RoshChodesh,
    RoshChodeshDayCount,
    AseretYemeiTeshuvah,
    SeasonalRain,
    SeasonalDew,
    HallelLevel,
    RainRequest,
    FastDay,
    TishaBav,
    OmerDay,
    Tachanun,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Sabbath => "sabbath",
            Field::YomTov => "yom_tov",
            Field::CholHamoed => "chol_hamoed",
            Field::HolidayKind => "holiday",
            Field::HolidayDay => "holiday_day",
            Field::RoshChodesh => "rosh_chodesh",
            Field::RoshChodeshDayCount => "rosh_chodesh_days",
            Field::AseretYemeiTeshuvah => "aseret_yemei_teshuvah",
            Field::SeasonalRain => "seasonal_rain",
            Field::SeasonalDew => "seasonal_dew",
            Field::HallelLevel => "hallel",
            Field::RainRequest => "rain_request",
            Field::FastDay => "fast_day",
            Field::TishaBav => "tisha_bav",
            Field::OmerDay => "omer_day",
            Field::Tachanun => "tachanun",
        }
    }
}

/// Condition accessors that record every field they hand out.
pub struct ConditionView<'a> {
    ctx: &'a ConditionContext,
    touched: RefCell<BTreeSet<Field>>,
}

impl<'a> ConditionView<'a> {
    pub fn new(ctx: &'a ConditionContext) -> Self {
        Self {
            ctx,
            touched: RefCell::new(BTreeSet::new()),
        }
    }

    fn touch(&self, field: Field) {
        self.touched.borrow_mut().insert(field);
    }

    /// Fields read so far, in canonical order
    pub fn touched(&self) -> Vec<Field> {
        self.touched.borrow().iter().copied().collect()
    }

    /// Render a field's value for signatures. Does not record a read.
    pub fn value_of(&self, field: Field) -> String {
        let ctx = self.ctx;
        match field {
            Field::Sabbath => ctx.is_sabbath().to_string(),
            Field::YomTov => ctx.is_yom_tov().to_string(),
            Field::CholHamoed => ctx.is_chol_hamoed().to_string(),
            Field::HolidayKind => ctx.holiday().kind().as_str().to_string(),
            Field::HolidayDay => ctx.holiday().day().unwrap_or(0).to_string(),
            Field::RoshChodesh => ctx.is_rosh_chodesh().to_string(),
            Field::RoshChodeshDayCount => ctx.rosh_chodesh_day_count().to_string(),
            Field::AseretYemeiTeshuvah => ctx.is_aseret_yemei_teshuvah().to_string(),
            Field::SeasonalRain => ctx.seasonal_rain().to_string(),
            Field::SeasonalDew => ctx.seasonal_dew().to_string(),
            Field::HallelLevel => ctx.hallel_level().as_str().to_string(),
            Field::RainRequest => ctx.rain_request().to_string(),
            Field::FastDay => ctx.is_fast_day().to_string(),
            Field::TishaBav => ctx.is_tisha_bav().to_string(),
            Field::OmerDay => ctx.omer_day().to_string(),
            Field::Tachanun => ctx.tachanun().to_string(),
        }
    }

    pub fn is_sabbath(&self) -> bool {
        self.touch(Field::Sabbath);
        self.ctx.is_sabbath()
    }

    pub fn is_yom_tov(&self) -> bool {
        self.touch(Field::YomTov);
        self.ctx.is_yom_tov()
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.touch(Field::CholHamoed);
        self.ctx.is_chol_hamoed()
    }

    /// Holiday without its day number; most rules only need this.
    pub fn holiday_kind(&self) -> HolidayKind {
        self.touch(Field::HolidayKind);
        self.ctx.holiday().kind()
    }

    /// Full holiday identity including the day number.
    pub fn holiday(&self) -> HolidayIdentity {
        self.touch(Field::HolidayKind);
        self.touch(Field::HolidayDay);
        self.ctx.holiday()
    }

    pub fn is_rosh_chodesh(&self) -> bool {
        self.touch(Field::RoshChodesh);
        self.ctx.is_rosh_chodesh()
    }

    pub fn rosh_chodesh_day_count(&self) -> u8 {
        self.touch(Field::RoshChodeshDayCount);
        self.ctx.rosh_chodesh_day_count()
    }

    pub fn is_aseret_yemei_teshuvah(&self) -> bool {
        self.touch(Field::AseretYemeiTeshuvah);
        self.ctx.is_aseret_yemei_teshuvah()
    }

    pub fn seasonal_rain(&self) -> bool {
        self.touch(Field::SeasonalRain);
        self.ctx.seasonal_rain()
    }

    pub fn seasonal_dew(&self) -> bool {
        self.touch(Field::SeasonalDew);
        self.ctx.seasonal_dew()
    }

    pub fn hallel_level(&self) -> HallelLevel {
        self.touch(Field::HallelLevel);
        self.ctx.hallel_level()
    }

    pub fn rain_request(&self) -> bool {
        self.touch(Field::RainRequest);
        self.ctx.rain_request()
    }

    pub fn is_fast_day(&self) -> bool {
        self.touch(Field::FastDay);
        self.ctx.is_fast_day()
    }

    pub fn is_tisha_bav(&self) -> bool {
        self.touch(Field::TishaBav);
        self.ctx.is_tisha_bav()
    }

    pub fn omer_day(&self) -> u8 {
        self.touch(Field::OmerDay);
        self.ctx.omer_day()
    }

    pub fn tachanun(&self) -> bool {
        self.touch(Field::Tachanun);
        self.ctx.tachanun()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_recorded_in_canonical_order() {
        let ctx = ConditionContext::builder().build().unwrap();
        let view = ConditionView::new(&ctx);
        assert!(view.touched().is_empty());

        view.tachanun();
        view.is_sabbath();
        view.holiday_kind();
        assert_eq!(
            view.touched(),
            vec![Field::Sabbath, Field::HolidayKind, Field::Tachanun]
        );
    }

    #[test]
    fn test_holiday_identity_records_day() {
        let ctx = ConditionContext::builder()
            .holiday(HolidayIdentity::Chanukah(4))
            .build()
            .unwrap();
        let view = ConditionView::new(&ctx);
        assert_eq!(view.holiday(), HolidayIdentity::Chanukah(4));
        assert_eq!(view.touched(), vec![Field::HolidayKind, Field::HolidayDay]);
        assert_eq!(view.value_of(Field::HolidayDay), "4");
    }

    #[test]
    fn test_value_of_does_not_record() {
        let ctx = ConditionContext::builder().build().unwrap();
        let view = ConditionView::new(&ctx);
        assert_eq!(view.value_of(Field::SeasonalDew), "true");
        assert!(view.touched().is_empty());
    }
}
