//! FILENAME: core/report-engine/src/header.rs
//! Column Headers - named predicates deciding which column an item lands in.
//!
//! A report holds an ordered list of headers. The first header that fits an
//! item wins, so a header list should partition the item domain.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::error::ReportError;
use crate::item::{AgeQueryItem, CategorizedQueryItem, TaskState};

pub trait ColumnHeader<I: ?Sized> {
    fn display_name(&self) -> String;
    fn fits(&self, item: &I) -> bool;
}

// ============================================================================
// CATEGORY HEADERS
// ============================================================================

/// One column per discrete value, matched by equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryColumnHeader<C> {
    category: C,
}

impl<C> CategoryColumnHeader<C> {
    pub fn new(category: C) -> Self {
        CategoryColumnHeader { category }
    }

    pub fn category(&self) -> &C {
        &self.category
    }
}

impl<I, C> ColumnHeader<I> for CategoryColumnHeader<C>
where
    I: CategorizedQueryItem<Category = C>,
    C: PartialEq + fmt::Display,
{
    fn display_name(&self) -> String {
        self.category.to_string()
    }

    fn fits(&self, item: &I) -> bool {
        *item.category() == self.category
    }
}

pub type TaskStatusColumnHeader = CategoryColumnHeader<TaskState>;

impl CategoryColumnHeader<TaskState> {
    /// One header per given state, in the given order.
    pub fn for_states(states: &[TaskState]) -> Vec<Self> {
        states.iter().copied().map(CategoryColumnHeader::new).collect()
    }
}

// ============================================================================
// TIME INTERVAL HEADERS
// ============================================================================

/// How an interval header renders its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalLabel {
    /// `<9`, `>20`, `5` or `[10 ... 19]`.
    Range,
    /// The date `lower_age_limit` days before the reference date, as
    /// `dd.MM.yyyy`.
    Date(NaiveDate),
}

/// Inclusive age interval `[lower_age_limit, upper_age_limit]`.
/// `i32::MIN` and `i32::MAX` stand for open ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIntervalColumnHeader {
    lower_age_limit: i32,
    upper_age_limit: i32,
    label: IntervalLabel,
}

impl TimeIntervalColumnHeader {
    pub fn new(lower_age_limit: i32, upper_age_limit: i32) -> Result<Self, ReportError> {
        if lower_age_limit > upper_age_limit {
            return Err(ReportError::InvalidInterval {
                lower: lower_age_limit,
                upper: upper_age_limit,
            });
        }
        Ok(TimeIntervalColumnHeader {
            lower_age_limit,
            upper_age_limit,
            label: IntervalLabel::Range,
        })
    }

    /// Exactly one age.
    pub fn single(age_in_days: i32) -> Self {
        TimeIntervalColumnHeader {
            lower_age_limit: age_in_days,
            upper_age_limit: age_in_days,
            label: IntervalLabel::Range,
        }
    }

    /// Everything up to and including `upper_age_limit`.
    pub fn below(upper_age_limit: i32) -> Self {
        TimeIntervalColumnHeader {
            lower_age_limit: i32::MIN,
            upper_age_limit,
            label: IntervalLabel::Range,
        }
    }

    /// Everything from `lower_age_limit` on.
    pub fn above(lower_age_limit: i32) -> Self {
        TimeIntervalColumnHeader {
            lower_age_limit,
            upper_age_limit: i32::MAX,
            label: IntervalLabel::Range,
        }
    }

    pub fn with_date_label(mut self, reference_date: NaiveDate) -> Self {
        self.label = IntervalLabel::Date(reference_date);
        self
    }

    pub fn lower_age_limit(&self) -> i32 {
        self.lower_age_limit
    }

    pub fn upper_age_limit(&self) -> i32 {
        self.upper_age_limit
    }

    pub fn contains(&self, age_in_days: i32) -> bool {
        age_in_days >= self.lower_age_limit && age_in_days <= self.upper_age_limit
    }

    fn range_label(&self) -> String {
        if self.lower_age_limit == i32::MIN {
            format!("<{}", self.upper_age_limit)
        } else if self.upper_age_limit == i32::MAX {
            format!(">{}", self.lower_age_limit)
        } else if self.lower_age_limit == self.upper_age_limit {
            self.lower_age_limit.to_string()
        } else {
            format!("[{} ... {}]", self.lower_age_limit, self.upper_age_limit)
        }
    }

    fn date_label(&self, reference_date: NaiveDate) -> Option<String> {
        if self.lower_age_limit == i32::MIN {
            return None;
        }
        let offset = i64::from(self.lower_age_limit);
        let date = if offset >= 0 {
            reference_date.checked_sub_days(Days::new(offset as u64))
        } else {
            reference_date.checked_add_days(Days::new(offset.unsigned_abs()))
        }?;
        Some(date.format("%d.%m.%Y").to_string())
    }
}

impl fmt::Display for TimeIntervalColumnHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.label {
            IntervalLabel::Range => None,
            IntervalLabel::Date(reference_date) => self.date_label(reference_date),
        };
        f.write_str(&label.unwrap_or_else(|| self.range_label()))
    }
}

impl<I: AgeQueryItem> ColumnHeader<I> for TimeIntervalColumnHeader {
    fn display_name(&self) -> String {
        self.to_string()
    }

    fn fits(&self, item: &I) -> bool {
        self.contains(item.age_in_days())
    }
}

/// Every finite limit of the given headers; what the working-days
/// converter needs to size its tables.
pub fn interval_boundaries(headers: &[TimeIntervalColumnHeader]) -> Vec<i32> {
    let mut boundaries: Vec<i32> = headers
        .iter()
        .flat_map(|h| [h.lower_age_limit, h.upper_age_limit])
        .filter(|&limit| limit != i32::MIN && limit != i32::MAX)
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}
