//! Civil to lunar calendar conversion.
//!
//! The classifier only needs [`CalendarProvider`]; [`HebrewCalendar`]
//! is the implementation shipped with the crate.

pub mod hebrew;

pub use hebrew::HebrewCalendar;

use crate::errors::Result;
use crate::model::{CivilDate, LunarDate};

/// Converts civil dates to lunar dates.
///
/// Implementations must be deterministic: the same civil date always maps to
/// the same lunar date.
pub trait CalendarProvider: Send + Sync {
    /// # Errors
    ///
    /// `CalendarProvider` when the date cannot be converted.
    fn to_lunar(&self, date: &CivilDate) -> Result<LunarDate>;
}

impl<T: CalendarProvider + ?Sized> CalendarProvider for &T {
    fn to_lunar(&self, date: &CivilDate) -> Result<LunarDate> {
        (**self).to_lunar(date)
    }
}

impl<T: CalendarProvider + ?Sized> CalendarProvider for Box<T> {
    fn to_lunar(&self, date: &CivilDate) -> Result<LunarDate> {
        (**self).to_lunar(date)
    }
}
