//! FILENAME: core/working-time/src/converter.rs
//! Working Days Converter - calendar-day age to working-day age.
//!
//! The converter is built once per report build for a fixed reference date
//! and the set of bucket boundaries the report's headers use. It walks the
//! calendar day by day away from the reference date and records, for every
//! calendar offset, how many working days that offset spans:
//! - positive age `k`: working days in `[reference - k, reference - 1]`
//! - negative age `-k`: minus the working days in `[reference + 1, reference + k]`
//!
//! Each side stops as soon as its working-day count exceeds the largest
//! finite boundary on that side. Ages outside the tables clamp to the last
//! entry, which already lies beyond every boundary, so clamping never moves
//! an item into a different bucket.
//!
//! A side never spans more than `MAX_SPAN_DAYS` calendar days and stops early
//! at the edge of the representable date range. Ages that far out cannot come
//! from stored task dates, so a huge finite boundary is treated like an open
//! one instead of failing the build.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};

use crate::calendar::WorkingDayCalendar;
use crate::error::TimeError;
use crate::log_debug;

/// Longest run of consecutive non-working days tolerated while scanning.
pub const SCAN_HORIZON_DAYS: u32 = 3660;

/// Widest calendar span one side of the table may cover, about 200 years.
pub const MAX_SPAN_DAYS: u64 = 73_050;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Past,
    Future,
}

#[derive(Debug, Clone)]
pub struct WorkingDaysConverter {
    reference_date: NaiveDate,
    /// Indexed by positive calendar age; values are >= 0 and non-decreasing.
    past: Vec<i32>,
    /// Indexed by the magnitude of a negative calendar age; values are <= 0
    /// and non-increasing.
    future: Vec<i32>,
}

impl WorkingDaysConverter {
    /// Precomputes the offset tables.
    ///
    /// `boundaries` are the interval limits of the report's headers, in
    /// working days. `i32::MIN` and `i32::MAX` mark open ends and are
    /// ignored.
    pub fn new<C>(
        calendar: &C,
        reference_date: NaiveDate,
        boundaries: impl IntoIterator<Item = i32>,
    ) -> Result<Self, TimeError>
    where
        C: WorkingDayCalendar + ?Sized,
    {
        let mut past_limit = 0;
        let mut future_limit = 0;
        for boundary in boundaries {
            if boundary == i32::MIN || boundary == i32::MAX {
                continue;
            }
            if boundary > 0 {
                past_limit = past_limit.max(boundary);
            } else {
                future_limit = future_limit.max(-boundary);
            }
        }

        let past = scan(calendar, reference_date, past_limit, Direction::Past)?;
        let future = scan(calendar, reference_date, future_limit, Direction::Future)?;

        log_debug!(
            "WORKDAYS",
            "reference={} calendar_range=[-{}, {}] working_range=[{}, {}]",
            reference_date,
            future.len() - 1,
            past.len() - 1,
            future.last().copied().unwrap_or(0),
            past.last().copied().unwrap_or(0)
        );

        Ok(WorkingDaysConverter {
            reference_date,
            past,
            future,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Calendar ages for which an exact value is stored. Anything outside
    /// is clamped.
    pub fn calendar_range(&self) -> RangeInclusive<i32> {
        -(self.future.len() as i32 - 1)..=(self.past.len() as i32 - 1)
    }

    /// O(1) lookup. Age 0 is always 0.
    pub fn to_working_days(&self, calendar_age: i32) -> i32 {
        let (table, index) = if calendar_age >= 0 {
            (&self.past, calendar_age as usize)
        } else {
            (&self.future, calendar_age.unsigned_abs() as usize)
        };
        table[index.min(table.len() - 1)]
    }

    /// The smallest calendar age (by magnitude) that spans at least the
    /// given number of working days, clamped like `to_working_days`.
    pub fn to_calendar_days(&self, working_days: i32) -> i32 {
        if working_days >= 0 {
            let index = self
                .past
                .iter()
                .position(|&w| w >= working_days)
                .unwrap_or(self.past.len() - 1);
            index as i32
        } else {
            let index = self
                .future
                .iter()
                .position(|&w| w <= working_days)
                .unwrap_or(self.future.len() - 1);
            -(index as i32)
        }
    }
}

/// Walks away from the reference date until the working-day count exceeds
/// `limit`, `MAX_SPAN_DAYS` is reached, or the next date is not
/// representable. The returned table is never empty.
fn scan<C>(
    calendar: &C,
    reference_date: NaiveDate,
    limit: i32,
    direction: Direction,
) -> Result<Vec<i32>, TimeError>
where
    C: WorkingDayCalendar + ?Sized,
{
    let mut table = vec![0];
    let mut working_days = 0i32;
    let mut idle_run = 0u32;
    let mut offset = 0u64;

    while working_days <= limit && offset < MAX_SPAN_DAYS {
        offset += 1;
        let next = match direction {
            Direction::Past => reference_date.checked_sub_days(Days::new(offset)),
            Direction::Future => reference_date.checked_add_days(Days::new(offset)),
        };
        let Some(date) = next else {
            log_debug!(
                "WORKDAYS",
                "scan stopped at date range edge reference={} offset={}",
                reference_date,
                offset - 1
            );
            break;
        };

        if calendar.is_working_day(date) {
            working_days += 1;
            idle_run = 0;
        } else {
            idle_run += 1;
            if idle_run > SCAN_HORIZON_DAYS {
                return Err(TimeError::NoWorkingDays {
                    reference: reference_date,
                    horizon: SCAN_HORIZON_DAYS,
                });
            }
        }

        table.push(match direction {
            Direction::Past => working_days,
            Direction::Future => -working_days,
        });
    }

    Ok(table)
}
