//! FILENAME: core/working-time/src/config.rs
//! Calendar Configuration - The serializable description of non-working days.
//!
//! These structures are designed to be:
//! - Loaded from a JSON document shipped with the deployment
//! - Validated once, when a `HolidayCalendar` is built from them
//! - Immutable snapshots for the lifetime of one report build

use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

// ============================================================================
// CUSTOM HOLIDAYS
// ============================================================================

/// A holiday that recurs every year on the same day of the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomHoliday {
    pub day: u32,
    pub month: u32,
}

impl CustomHoliday {
    pub fn new(day: u32, month: u32) -> Self {
        CustomHoliday { day, month }
    }

    /// Rejects day/month pairs that exist in no year (leap years included).
    pub fn validate(&self) -> Result<(), TimeError> {
        match NaiveDate::from_ymd_opt(2000, self.month, self.day) {
            Some(_) => Ok(()),
            None => Err(TimeError::InvalidHoliday {
                day: self.day,
                month: self.month,
            }),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() == self.day && date.month() == self.month
    }
}

// ============================================================================
// CALENDAR CONFIGURATION
// ============================================================================

/// Which days a `HolidayCalendar` treats as non-working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Weekdays that are never worked (defaults to Saturday and Sunday).
    #[serde(default = "default_non_working_weekdays")]
    pub non_working_weekdays: Vec<Weekday>,

    /// Holidays recurring every year on a fixed day and month.
    #[serde(default)]
    pub custom_holidays: Vec<CustomHoliday>,

    /// One-off holidays on a specific date.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,

    /// Whether the nationwide German public holidays are non-working.
    #[serde(default)]
    pub german_public_holidays_enabled: bool,

    /// Whether Corpus Christi counts as a German public holiday.
    /// Only consulted when `german_public_holidays_enabled` is set.
    #[serde(default)]
    pub corpus_christi_enabled: bool,
}

fn default_non_working_weekdays() -> Vec<Weekday> {
    vec![Weekday::Sat, Weekday::Sun]
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            non_working_weekdays: default_non_working_weekdays(),
            custom_holidays: Vec::new(),
            holidays: Vec::new(),
            german_public_holidays_enabled: false,
            corpus_christi_enabled: false,
        }
    }
}

impl CalendarConfig {
    /// Parses a configuration from a JSON document. Missing keys take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, TimeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file. An unreadable file means the calendar
    /// source is unavailable, which no report build can recover from.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TimeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            TimeError::CalendarUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&json)
    }
}
