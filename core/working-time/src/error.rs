//! FILENAME: core/working-time/src/error.rs

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Holiday calendar unavailable at {path}: {source}")]
    CalendarUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid calendar configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Invalid custom holiday: day {day} of month {month} does not exist")]
    InvalidHoliday { day: u32, month: u32 },

    #[error("No working day within {horizon} days of {reference}")]
    NoWorkingDays { reference: NaiveDate, horizon: u32 },
}
