//! Classifier configuration.
//!
//! ```toml
//! diaspora = true
//! calendar_range_start = "1900-01-01"
//! calendar_range_end = "2199-12-31"
//! ```

use crate::calendar::hebrew::{HebrewCalendar, MAX_YEAR, MIN_YEAR};
use crate::errors::{Result, SiddurError};
use crate::model::CivilDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locale and supported span for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Diaspora rules: eight-day Pesach, second day of Shavuot, Simchat
    /// Torah on 23 Tishrei and the December rain-request start.
    pub diaspora: bool,
    pub calendar_range_start: CivilDate,
    pub calendar_range_end: CivilDate,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            diaspora: true,
            calendar_range_start: default_start(),
            calendar_range_end: default_end(),
        }
    }
}

fn default_start() -> CivilDate {
    CivilDate::from_ymd(1900, 1, 1).unwrap_or_else(|| CivilDate::new(chrono::NaiveDate::MIN))
}

fn default_end() -> CivilDate {
    CivilDate::from_ymd(2199, 12, 31).unwrap_or_else(|| CivilDate::new(chrono::NaiveDate::MAX))
}

impl ClassifierConfig {
    /// Diaspora defaults with the standard range
    pub fn diaspora() -> Self {
        Self::default()
    }

    /// Land-of-Israel rules with the standard range
    pub fn local() -> Self {
        Self {
            diaspora: false,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start: CivilDate, end: CivilDate) -> Self {
        self.calendar_range_start = start;
        self.calendar_range_end = end;
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed TOML or an invalid range.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ClassifierConfig =
            toml::from_str(input).map_err(|e| SiddurError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the file cannot be read or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SiddurError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// `InvalidConfig` when the range is inverted or leaves the span the
    /// calendar provider covers.
    pub fn validate(&self) -> Result<()> {
        if self.calendar_range_start > self.calendar_range_end {
            return Err(SiddurError::InvalidConfig {
                reason: format!(
                    "calendar_range_start {} is after calendar_range_end {}",
                    self.calendar_range_start, self.calendar_range_end
                ),
            });
        }
        let lower = HebrewCalendar::new_year(MIN_YEAR).map(|d| d.day_number());
        let upper = HebrewCalendar::new_year(MAX_YEAR + 1).map(|d| d.day_number());
        // Classification looks back into the previous month and ahead one day.
        let inside = match (lower, upper) {
            (Some(lower), Some(upper)) => {
                self.calendar_range_start.day_number() - 31 >= lower
                    && self.calendar_range_end.day_number() + 1 < upper
            }
            _ => false,
        };
        if !inside {
            return Err(SiddurError::InvalidConfig {
                reason: format!(
                    "range {}..={} leaves lunar years {}..={}",
                    self.calendar_range_start, self.calendar_range_end, MIN_YEAR, MAX_YEAR
                ),
            });
        }
        Ok(())
    }

    pub fn contains(&self, date: &CivilDate) -> bool {
        (self.calendar_range_start..=self.calendar_range_end).contains(date)
    }
}
