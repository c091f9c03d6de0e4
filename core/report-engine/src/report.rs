//! FILENAME: core/report-engine/src/report.rs
//! Report - the row x column aggregate built from query items.
//!
//! Algorithm for every inserted item:
//! 1. Look up or create the row for `item.key()` (first-seen order is kept)
//! 2. Pick the FIRST header that fits the item; later headers never get it
//! 3. Add the value to that column and to the row total
//! 4. If no header fits, add the value to the row total only
//!
//! The same happens on the sum row, so the sum row's total always equals
//! the sum of all inserted values.
//!
//! A report has no explicit "finalized" state. Readers get copies of cell
//! data; inserting after reading is allowed but callers normally don't.

use std::marker::PhantomData;

use working_time::log_debug;

use crate::header::ColumnHeader;
use crate::item::QueryItem;
use crate::preprocessor::QueryItemPreprocessor;
use crate::row::{Row, SingleRow};
use crate::row_map::RowMap;
use crate::view::ReportView;

/// Key of the row summing up every item.
pub const SUM_ROW_KEY: &str = "Total";

#[derive(Debug, Clone)]
pub struct Report<I, H, R = SingleRow> {
    row_desc: Vec<String>,
    headers: Vec<H>,
    rows: RowMap<R>,
    sum_row: R,
    _items: PhantomData<fn(&I)>,
}

impl<I, H, R> Report<I, H, R>
where
    I: QueryItem,
    H: ColumnHeader<I>,
    R: Row<I>,
{
    /// An empty report. The headers are fixed from here on.
    pub fn new(headers: Vec<H>, row_desc: Vec<String>) -> Self {
        let sum_row = R::new_row(SUM_ROW_KEY, headers.len());
        Report {
            row_desc,
            headers,
            rows: RowMap::new(),
            sum_row,
            _items: PhantomData,
        }
    }

    pub fn headers(&self) -> &[H] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_desc(&self) -> &[String] {
        &self.row_desc
    }

    /// Index of the first header that fits the item.
    pub fn column_index(&self, item: &I) -> Option<usize> {
        self.headers.iter().position(|header| header.fits(item))
    }

    pub fn insert(&mut self, item: &I) {
        let column = self.column_index(item);
        if column.is_none() {
            log_debug!(
                "REPORT",
                "item for row '{}' with value {} fits no column",
                item.key(),
                item.value()
            );
        }

        let column_count = self.headers.len();
        self.rows
            .get_or_insert_with(item.key(), || R::new_row(item.key(), column_count))
            .add_item(item, column);
        self.sum_row.add_item(item, column);
    }

    pub fn insert_all<'a>(&mut self, items: impl IntoIterator<Item = &'a I>)
    where
        I: 'a,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Runs the item through `preprocessor` first, then inserts it.
    pub fn insert_preprocessed<P>(&mut self, item: I, preprocessor: &P)
    where
        P: QueryItemPreprocessor<I> + ?Sized,
    {
        let item = preprocessor.apply(item);
        self.insert(&item);
    }

    pub fn insert_all_preprocessed<P>(&mut self, items: impl IntoIterator<Item = I>, preprocessor: &P)
    where
        P: QueryItemPreprocessor<I> + ?Sized,
    {
        for item in items {
            self.insert_preprocessed(item, preprocessor);
        }
    }

    pub fn row(&self, key: &str) -> Option<&R> {
        self.rows.get(key)
    }

    /// Renames a row for display. Rows are never handed out mutably, so
    /// row totals always add up to the sum row. Returns false for an
    /// unknown key.
    pub fn set_row_display_name(&mut self, key: &str, display_name: impl Into<String>) -> bool {
        match self.rows.get_mut(key) {
            Some(row) => {
                row.set_display_name(display_name.into());
                true
            }
            None => false,
        }
    }

    /// Rows in the order their keys were first seen.
    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn row_keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sum_row(&self) -> &R {
        &self.sum_row
    }

    /// Sum of every inserted value, matched or not.
    pub fn total_value(&self) -> i64 {
        self.sum_row.total_value()
    }

    pub fn to_view(&self) -> ReportView {
        ReportView {
            row_desc: self.row_desc.clone(),
            column_headers: self.headers.iter().map(|h| h.display_name()).collect(),
            rows: self.rows.values().map(|row| row.to_view()).collect(),
            sum_row: self.sum_row.to_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{TaskStatusColumnHeader, TimeIntervalColumnHeader};
    use crate::item::{MonitorQueryItem, TaskQueryItem, TaskState};

    type StatusReport = Report<TaskQueryItem, TaskStatusColumnHeader>;
    type AgeReport = Report<MonitorQueryItem, TimeIntervalColumnHeader>;

    fn status_report() -> StatusReport {
        Report::new(
            TaskStatusColumnHeader::for_states(&[
                TaskState::Ready,
                TaskState::Claimed,
                TaskState::Completed,
            ]),
            vec!["WORKBASKET".to_string()],
        )
    }

    fn age_headers() -> Vec<TimeIntervalColumnHeader> {
        vec![
            TimeIntervalColumnHeader::below(9),
            TimeIntervalColumnHeader::new(10, 19).unwrap(),
            TimeIntervalColumnHeader::above(20),
        ]
    }

    #[test]
    fn test_status_report_example() {
        let mut report = status_report();
        report.insert(&TaskQueryItem::new("WB1", TaskState::Ready, 3));
        report.insert(&TaskQueryItem::new("WB1", TaskState::Claimed, 2));
        report.insert(&TaskQueryItem::new("WB2", TaskState::Completed, 5));

        assert_eq!(report.row_keys().collect::<Vec<_>>(), vec!["WB1", "WB2"]);

        let wb1 = report.row("WB1").unwrap();
        assert_eq!(wb1.cells(), vec![3, 2, 0]);
        assert_eq!(wb1.total_value(), 5);

        let wb2 = report.row("WB2").unwrap();
        assert_eq!(wb2.cells(), vec![0, 0, 5]);
        assert_eq!(wb2.total_value(), 5);

        assert_eq!(report.sum_row().cells(), vec![3, 2, 5]);
        assert_eq!(report.total_value(), 10);
    }

    #[test]
    fn test_interval_report_example() {
        let mut report = AgeReport::new(age_headers(), Vec::new());
        for age in [5, 15, 25, 9, 10] {
            report.insert(&MonitorQueryItem::new("WB1", age, 1));
        }

        let row = report.row("WB1").unwrap();
        assert_eq!(row.cells(), vec![2, 2, 1]);
        assert_eq!(row.total_value(), 5);
    }

    #[test]
    fn test_first_matching_header_wins() {
        let headers = vec![
            TimeIntervalColumnHeader::new(0, 10).unwrap(),
            TimeIntervalColumnHeader::new(5, 15).unwrap(),
        ];
        let mut report = AgeReport::new(headers, Vec::new());

        for _ in 0..10 {
            report.insert(&MonitorQueryItem::new("WB1", 7, 1));
        }

        assert_eq!(report.row("WB1").unwrap().cells(), vec![10, 0]);
    }

    #[test]
    fn test_unmatched_item_counts_in_totals_only() {
        let headers = vec![TimeIntervalColumnHeader::new(0, 10).unwrap()];
        let mut report = AgeReport::new(headers, Vec::new());
        report.insert(&MonitorQueryItem::new("WB1", 3, 2));
        report.insert(&MonitorQueryItem::new("WB1", 50, 4));
        report.insert(&MonitorQueryItem::new("WB2", -1, 1));

        let wb1 = report.row("WB1").unwrap();
        assert_eq!(wb1.cells(), vec![2]);
        assert_eq!(wb1.total_value(), 6);
        assert_eq!(wb1.unassigned_value(), 4);

        let wb2 = report.row("WB2").unwrap();
        assert_eq!(wb2.cells(), vec![0]);
        assert_eq!(wb2.total_value(), 1);

        assert_eq!(report.total_value(), 7);
    }

    #[test]
    fn test_empty_report() {
        let report = status_report();
        assert!(report.is_empty());
        assert_eq!(report.row_count(), 0);
        assert_eq!(report.sum_row().cells(), vec![0, 0, 0]);
        assert_eq!(report.total_value(), 0);
        assert!(report.row("WB1").is_none());
    }

    #[test]
    fn test_report_without_headers() {
        let mut report = AgeReport::new(Vec::new(), Vec::new());
        report.insert(&MonitorQueryItem::new("WB1", 3, 2));

        let row = report.row("WB1").unwrap();
        assert!(row.cells().is_empty());
        assert_eq!(row.total_value(), 2);
    }

    #[test]
    fn test_preprocessed_insert() {
        let mut report = AgeReport::new(age_headers(), Vec::new());
        let halve = |mut item: MonitorQueryItem| {
            item.age_in_days /= 2;
            item
        };

        report.insert_all_preprocessed(
            vec![
                MonitorQueryItem::new("WB1", 30, 1),
                MonitorQueryItem::new("WB1", 50, 1),
            ],
            &halve,
        );

        assert_eq!(report.row("WB1").unwrap().cells(), vec![0, 1, 1]);
    }

    #[test]
    fn test_display_names_and_view() {
        let mut report = status_report();
        report.insert_all(&[
            TaskQueryItem::new("WB1", TaskState::Ready, 3),
            TaskQueryItem::new("WB2", TaskState::Claimed, 1),
        ]);
        assert!(report.set_row_display_name("WB1", "First Workbasket"));
        assert!(!report.set_row_display_name("WB9", "Missing"));

        let view = report.to_view();
        assert_eq!(view.column_headers, vec!["READY", "CLAIMED", "COMPLETED"]);
        assert_eq!(view.row_desc, vec!["WORKBASKET"]);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].display_name, "First Workbasket");
        assert_eq!(view.rows[0].key, "WB1");
        assert_eq!(view.sum_row.key, SUM_ROW_KEY);
        assert_eq!(view.sum_row.cells, vec![3, 1, 0]);
    }

    #[test]
    fn test_renaming_keeps_totals() {
        let mut report = status_report();
        report.insert(&TaskQueryItem::new("WB1", TaskState::Ready, 3));
        report.set_row_display_name("WB1", "Renamed");

        let row = report.row("WB1").unwrap();
        assert_eq!(row.display_name(), "Renamed");
        assert_eq!(row.total_value(), report.total_value());
        assert_eq!(row.cells(), report.sum_row().cells());
    }
}
