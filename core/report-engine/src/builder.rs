//! FILENAME: core/report-engine/src/builder.rs
//! Report Builds - fold a batch of fetched query items into a report.
//!
//! A build is synchronous and owns everything it creates: the report, its
//! rows and, for age reports, the working-days stage. Configuration errors
//! surface before the first item is touched; no partial report is returned.

use working_time::{log_enter, log_exit, WorkingDayCalendar};

use crate::config::ReportOptions;
use crate::error::ReportError;
use crate::header::{ColumnHeader, TimeIntervalColumnHeader};
use crate::item::{AgeQueryItem, QueryItem};
use crate::preprocessor::DaysToWorkingDaysPreprocessor;
use crate::report::Report;
use crate::row::Row;

/// Builds a report without preprocessing.
pub fn build_report<I, H, R>(
    headers: Vec<H>,
    row_desc: Vec<String>,
    items: impl IntoIterator<Item = I>,
) -> Report<I, H, R>
where
    I: QueryItem,
    H: ColumnHeader<I>,
    R: Row<I>,
{
    log_enter!("REPORT", "build_report", "columns={}", headers.len());

    let mut report = Report::new(headers, row_desc);
    let mut item_count = 0usize;
    for item in items {
        report.insert(&item);
        item_count += 1;
    }

    log_exit!(
        "REPORT",
        "build_report",
        "items={} rows={} total={}",
        item_count,
        report.row_count(),
        report.total_value()
    );
    report
}

/// Builds an age-bucketed report. With `options.in_working_days` set, item
/// ages are converted to working days relative to `options.as_of` using
/// `calendar`; the conversion table is computed once for the whole build.
pub fn build_time_interval_report<I, R, C>(
    headers: Vec<TimeIntervalColumnHeader>,
    row_desc: Vec<String>,
    items: impl IntoIterator<Item = I>,
    calendar: &C,
    options: &ReportOptions,
) -> Result<Report<I, TimeIntervalColumnHeader, R>, ReportError>
where
    I: AgeQueryItem,
    R: Row<I>,
    C: WorkingDayCalendar + ?Sized,
{
    let reference_date = options.reference_date();
    log_enter!(
        "REPORT",
        "build_time_interval_report",
        "columns={} working_days={} reference={}",
        headers.len(),
        options.in_working_days,
        reference_date
    );

    let preprocessor = DaysToWorkingDaysPreprocessor::new(
        &headers,
        calendar,
        reference_date,
        options.in_working_days,
    )?;

    let mut report = Report::new(headers, row_desc);
    let mut item_count = 0usize;
    for item in items {
        report.insert_preprocessed(item, &preprocessor);
        item_count += 1;
    }

    log_exit!(
        "REPORT",
        "build_time_interval_report",
        "items={} rows={} total={}",
        item_count,
        report.row_count(),
        report.total_value()
    );
    Ok(report)
}
