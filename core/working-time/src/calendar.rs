//! FILENAME: core/working-time/src/calendar.rs
//! Holiday Calendar - decides per date whether it is a working day.
//!
//! A date is non-working when any of these hold:
//! - its weekday is configured as non-working
//! - it matches a recurring custom holiday or a one-off holiday date
//! - German public holidays are enabled and it is one of them

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rustc_hash::FxHashSet;

use crate::config::{CalendarConfig, CustomHoliday};
use crate::error::TimeError;

/// The working-time service the converter walks over.
pub trait WorkingDayCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool;
}

impl<C: WorkingDayCalendar + ?Sized> WorkingDayCalendar for &C {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        (**self).is_working_day(date)
    }
}

// ============================================================================
// GERMAN PUBLIC HOLIDAYS
// ============================================================================

/// Fixed-date nationwide holidays: New Year, Labour Day, German Unity Day,
/// Christmas Day and Boxing Day.
const GERMAN_FIXED_HOLIDAYS: [CustomHoliday; 5] = [
    CustomHoliday { day: 1, month: 1 },
    CustomHoliday { day: 1, month: 5 },
    CustomHoliday { day: 3, month: 10 },
    CustomHoliday { day: 25, month: 12 },
    CustomHoliday { day: 26, month: 12 },
];

/// Offsets from Easter Sunday: Good Friday, Easter Monday, Ascension Day,
/// Whit Monday.
const GERMAN_EASTER_OFFSETS: [i64; 4] = [-2, 1, 39, 50];

const CORPUS_CHRISTI_OFFSET: i64 = 60;

/// Easter Sunday of the given year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn offset_from(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

// ============================================================================
// HOLIDAY CALENDAR
// ============================================================================

/// A validated, lookup-friendly form of `CalendarConfig`.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    /// Indexed by `Weekday::num_days_from_monday()`.
    non_working_weekdays: [bool; 7],
    custom_holidays: FxHashSet<CustomHoliday>,
    holidays: FxHashSet<NaiveDate>,
    german_public_holidays: bool,
    corpus_christi: bool,
}

impl HolidayCalendar {
    pub fn new(config: &CalendarConfig) -> Result<Self, TimeError> {
        let mut non_working_weekdays = [false; 7];
        for weekday in &config.non_working_weekdays {
            non_working_weekdays[weekday.num_days_from_monday() as usize] = true;
        }

        let mut custom_holidays = FxHashSet::default();
        for holiday in &config.custom_holidays {
            holiday.validate()?;
            custom_holidays.insert(*holiday);
        }

        Ok(HolidayCalendar {
            non_working_weekdays,
            custom_holidays,
            holidays: config.holidays.iter().copied().collect(),
            german_public_holidays: config.german_public_holidays_enabled,
            corpus_christi: config.corpus_christi_enabled,
        })
    }

    pub fn is_non_working_weekday(&self, weekday: Weekday) -> bool {
        self.non_working_weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Whether the date is a holiday of any configured kind. Weekdays are
    /// not considered here.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
            || self.custom_holidays.contains(&CustomHoliday::new(date.day(), date.month()))
            || (self.german_public_holidays && self.is_german_holiday(date))
    }

    /// Whether the date is a nationwide German public holiday, honouring
    /// the Corpus Christi switch.
    pub fn is_german_holiday(&self, date: NaiveDate) -> bool {
        if GERMAN_FIXED_HOLIDAYS.iter().any(|h| h.matches(date)) {
            return true;
        }

        // Every Easter-dependent holiday falls between March and June.
        if !(3..=6).contains(&date.month()) {
            return false;
        }
        let Some(easter) = easter_sunday(date.year()) else {
            return false;
        };

        let is_easter_holiday = GERMAN_EASTER_OFFSETS
            .iter()
            .any(|&offset| offset_from(easter, offset) == Some(date));

        is_easter_holiday
            || (self.corpus_christi && offset_from(easter, CORPUS_CHRISTI_OFFSET) == Some(date))
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        // The default configuration has no custom holidays to reject.
        HolidayCalendar {
            non_working_weekdays: [false, false, false, false, false, true, true],
            custom_holidays: FxHashSet::default(),
            holidays: FxHashSet::default(),
            german_public_holidays: false,
            corpus_christi: false,
        }
    }
}

impl WorkingDayCalendar for HolidayCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_non_working_weekday(date.weekday()) && !self.is_holiday(date)
    }
}
