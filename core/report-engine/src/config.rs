//! FILENAME: core/report-engine/src/config.rs
//! Engine Configuration - per-deployment settings for report builds.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use working_time::{CalendarConfig, HolidayCalendar, TimeError};

use crate::error::ReportError;

/// Settings that apply to every age-bucketed report build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Convert item ages from calendar days to working days before
    /// bucketing.
    #[serde(default)]
    pub in_working_days: bool,

    /// The instant ages are measured from. `None` means "now".
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl ReportOptions {
    pub fn in_working_days() -> Self {
        ReportOptions {
            in_working_days: true,
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(Utc::now).date_naive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub reports: ReportOptions,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Configuration(TimeError::from(e)))
    }

    /// Loads the configuration file; an unreadable file is a configuration
    /// error like a missing calendar.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            TimeError::CalendarUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&json)
    }

    pub fn holiday_calendar(&self) -> Result<HolidayCalendar, ReportError> {
        Ok(HolidayCalendar::new(&self.calendar)?)
    }
}
