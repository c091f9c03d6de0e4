//! FILENAME: core/working-time/src/lib.rs
//! Working-time subsystem for the monitor reports.
//!
//! This crate answers one question for the report engine: how many
//! working days lie between a reference date and a date N calendar days
//! away. It depends on nothing report-specific.
//!
//! Layers:
//! - `config`: Serializable calendar configuration (what counts as a holiday)
//! - `calendar`: Holiday rules evaluated per date
//! - `converter`: Precomputed calendar-age to working-day-age tables
//! - `logging`: Category-tagged logging shared by the workspace

pub mod logging;
pub mod error;
pub mod config;
pub mod calendar;
pub mod converter;

pub use error::TimeError;
pub use config::{CalendarConfig, CustomHoliday};
pub use calendar::{easter_sunday, HolidayCalendar, WorkingDayCalendar};
pub use converter::WorkingDaysConverter;
