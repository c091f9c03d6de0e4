//! FILENAME: core/report-engine/src/reports.rs
//! Concrete report shapes offered by the monitor.

use working_time::WorkingDayCalendar;

use crate::builder::{build_report, build_time_interval_report};
use crate::config::ReportOptions;
use crate::error::ReportError;
use crate::header::{TaskStatusColumnHeader, TimeIntervalColumnHeader};
use crate::item::{DetailedMonitorQueryItem, MonitorQueryItem, TaskQueryItem, TaskState};
use crate::report::Report;
use crate::row::FoldableRow;

pub const WORKBASKET_ROW_DESC: &str = "WORKBASKET";
pub const CLASSIFICATION_ROW_DESC: &str = "CLASSIFICATION";
pub const ATTACHMENT_ROW_DESC: &str = "ATTACHMENT";

/// Rows by workbasket key, one column per task state.
pub type TaskStatusReport = Report<TaskQueryItem, TaskStatusColumnHeader>;

/// Rows by workbasket key, columns by age interval.
pub type WorkbasketReport = Report<MonitorQueryItem, TimeIntervalColumnHeader>;

/// Rows by classification key, columns by age interval.
pub type ClassificationReport = Report<MonitorQueryItem, TimeIntervalColumnHeader>;

/// Rows by classification key folded by attachment classification key,
/// columns by age interval.
pub type DetailedClassificationReport =
    Report<DetailedMonitorQueryItem, TimeIntervalColumnHeader, FoldableRow>;

/// `states` selects and orders the columns; `None` means every state.
pub fn task_status_report(
    items: impl IntoIterator<Item = TaskQueryItem>,
    states: Option<&[TaskState]>,
) -> TaskStatusReport {
    let headers = TaskStatusColumnHeader::for_states(states.unwrap_or(&TaskState::ALL));
    build_report(headers, vec![WORKBASKET_ROW_DESC.to_string()], items)
}

pub fn workbasket_report<C>(
    headers: Vec<TimeIntervalColumnHeader>,
    items: impl IntoIterator<Item = MonitorQueryItem>,
    calendar: &C,
    options: &ReportOptions,
) -> Result<WorkbasketReport, ReportError>
where
    C: WorkingDayCalendar + ?Sized,
{
    build_time_interval_report(
        headers,
        vec![WORKBASKET_ROW_DESC.to_string()],
        items,
        calendar,
        options,
    )
}

pub fn classification_report<C>(
    headers: Vec<TimeIntervalColumnHeader>,
    items: impl IntoIterator<Item = MonitorQueryItem>,
    calendar: &C,
    options: &ReportOptions,
) -> Result<ClassificationReport, ReportError>
where
    C: WorkingDayCalendar + ?Sized,
{
    build_time_interval_report(
        headers,
        vec![CLASSIFICATION_ROW_DESC.to_string()],
        items,
        calendar,
        options,
    )
}

pub fn detailed_classification_report<C>(
    headers: Vec<TimeIntervalColumnHeader>,
    items: impl IntoIterator<Item = DetailedMonitorQueryItem>,
    calendar: &C,
    options: &ReportOptions,
) -> Result<DetailedClassificationReport, ReportError>
where
    C: WorkingDayCalendar + ?Sized,
{
    build_time_interval_report(
        headers,
        vec![
            CLASSIFICATION_ROW_DESC.to_string(),
            ATTACHMENT_ROW_DESC.to_string(),
        ],
        items,
        calendar,
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use working_time::HolidayCalendar;

    #[test]
    fn test_task_status_report_all_states() {
        let report = task_status_report(
            vec![
                TaskQueryItem::new("WB1", TaskState::Terminated, 1),
                TaskQueryItem::new("WB1", TaskState::Ready, 2),
            ],
            None,
        );

        assert_eq!(report.column_count(), 5);
        assert_eq!(report.row("WB1").unwrap().cells(), vec![2, 0, 0, 0, 1]);
        assert_eq!(report.row_desc(), &["WORKBASKET".to_string()]);
    }

    #[test]
    fn test_task_status_report_selected_states() {
        let report = task_status_report(
            vec![
                TaskQueryItem::new("WB1", TaskState::Claimed, 4),
                TaskQueryItem::new("WB1", TaskState::Completed, 3),
            ],
            Some(&[TaskState::Claimed][..]),
        );

        let row = report.row("WB1").unwrap();
        assert_eq!(row.cells(), vec![4]);
        assert_eq!(row.total_value(), 7);
    }

    #[test]
    fn test_detailed_classification_report() {
        let headers = vec![
            TimeIntervalColumnHeader::below(0),
            TimeIntervalColumnHeader::above(1),
        ];
        let items = vec![
            DetailedMonitorQueryItem::new("L10000", Some("L20000".to_string()), 0, 2),
            DetailedMonitorQueryItem::new("L10000", None, 3, 1),
            DetailedMonitorQueryItem::new("L30000", Some("L20000".to_string()), 5, 6),
        ];

        let report = detailed_classification_report(
            headers,
            items,
            &HolidayCalendar::default(),
            &ReportOptions::default(),
        )
        .unwrap();

        assert_eq!(report.row_desc().len(), 2);
        let row = report.row("L10000").unwrap();
        assert_eq!(row.foldable_row_count(), 2);
        assert_eq!(row.foldable_row("L20000").unwrap().cells(), vec![2, 0]);
        assert_eq!(row.foldable_row("N/A").unwrap().cells(), vec![0, 1]);
        assert_eq!(report.sum_row().foldable_row("L20000").unwrap().total_value(), 8);
    }

    #[test]
    fn test_workbasket_and_classification_row_desc() {
        let calendar = HolidayCalendar::default();
        let options = ReportOptions::default();

        let report = workbasket_report(Vec::new(), Vec::new(), &calendar, &options).unwrap();
        assert_eq!(report.row_desc(), &["WORKBASKET".to_string()]);

        let report = classification_report(Vec::new(), Vec::new(), &calendar, &options).unwrap();
        assert_eq!(report.row_desc(), &["CLASSIFICATION".to_string()]);
    }
}
