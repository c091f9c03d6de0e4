//! FILENAME: core/report-engine/src/preprocessor.rs
//! Preprocessors - item transformations applied before insertion.
//!
//! A report build creates its stages once and runs every item through them
//! in declaration order. The working-days stage owns a precomputed offset
//! table; building it per item would make every conversion a calendar walk.

use chrono::NaiveDate;
use working_time::{WorkingDayCalendar, WorkingDaysConverter};

use crate::error::ReportError;
use crate::header::{interval_boundaries, TimeIntervalColumnHeader};
use crate::item::AgeQueryItem;

pub trait QueryItemPreprocessor<I> {
    fn apply(&self, item: I) -> I;
}

impl<I, F> QueryItemPreprocessor<I> for F
where
    F: Fn(I) -> I,
{
    fn apply(&self, item: I) -> I {
        self(item)
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Ordered chain of stages; an empty pipeline passes items through.
pub struct PreprocessorPipeline<I> {
    stages: Vec<Box<dyn QueryItemPreprocessor<I>>>,
}

impl<I> PreprocessorPipeline<I> {
    pub fn new() -> Self {
        PreprocessorPipeline { stages: Vec::new() }
    }

    pub fn push(&mut self, stage: impl QueryItemPreprocessor<I> + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn with_stage(mut self, stage: impl QueryItemPreprocessor<I> + 'static) -> Self {
        self.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<I> Default for PreprocessorPipeline<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> QueryItemPreprocessor<I> for PreprocessorPipeline<I> {
    fn apply(&self, item: I) -> I {
        self.stages.iter().fold(item, |item, stage| stage.apply(item))
    }
}

// ============================================================================
// WORKING DAYS
// ============================================================================

/// Rewrites an item's calendar-day age to working days. When deactivated
/// no converter is built and items pass through unchanged.
#[derive(Debug, Clone)]
pub struct DaysToWorkingDaysPreprocessor {
    converter: Option<WorkingDaysConverter>,
}

impl DaysToWorkingDaysPreprocessor {
    pub fn new<C>(
        headers: &[TimeIntervalColumnHeader],
        calendar: &C,
        reference_date: NaiveDate,
        activate: bool,
    ) -> Result<Self, ReportError>
    where
        C: WorkingDayCalendar + ?Sized,
    {
        if !activate {
            return Ok(Self::deactivated());
        }
        let converter =
            WorkingDaysConverter::new(calendar, reference_date, interval_boundaries(headers))?;
        Ok(DaysToWorkingDaysPreprocessor {
            converter: Some(converter),
        })
    }

    pub fn deactivated() -> Self {
        DaysToWorkingDaysPreprocessor { converter: None }
    }

    pub fn is_active(&self) -> bool {
        self.converter.is_some()
    }

    pub fn converter(&self) -> Option<&WorkingDaysConverter> {
        self.converter.as_ref()
    }
}

impl<I: AgeQueryItem> QueryItemPreprocessor<I> for DaysToWorkingDaysPreprocessor {
    fn apply(&self, mut item: I) -> I {
        if let Some(converter) = &self.converter {
            let age = converter.to_working_days(item.age_in_days());
            item.set_age_in_days(age);
        }
        item
    }
}
