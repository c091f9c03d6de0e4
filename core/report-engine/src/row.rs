//! FILENAME: core/report-engine/src/row.rs
//! Rows - per-key accumulators of column totals and a grand total.
//!
//! Invariant for every row: `total_value() >= sum(cells())` when all item
//! values are non-negative, with equality iff every item added found a
//! column. A `FoldableRow` is the sum of its nested rows, column by column.

use smallvec::{smallvec, SmallVec};

use crate::item::{FoldableQueryItem, QueryItem};
use crate::row_map::RowMap;
use crate::view::RowView;

/// Nested row key for items that carry no secondary key.
pub const DEFAULT_FOLD_KEY: &str = "N/A";

/// Cells of typical reports stay inline.
type Cells = SmallVec<[i64; 8]>;

pub trait Row<I: ?Sized> {
    /// Creates an empty row with one zeroed cell per column.
    fn new_row(key: &str, column_count: usize) -> Self
    where
        Self: Sized;

    fn key(&self) -> &str;

    fn display_name(&self) -> &str;

    fn set_display_name(&mut self, display_name: String);

    /// Adds the item's value to the total and, if `column` is set, to that
    /// cell. `column` is the index of the first header that fits the item.
    fn add_item(&mut self, item: &I, column: Option<usize>);

    fn column_count(&self) -> usize;

    fn cell(&self, column: usize) -> Option<i64>;

    /// A copy of the cell values; changing it does not touch the row.
    fn cells(&self) -> Vec<i64>;

    fn total_value(&self) -> i64;

    /// The part of the total no column accounted for.
    fn unassigned_value(&self) -> i64 {
        self.total_value() - self.cells().iter().sum::<i64>()
    }

    fn to_view(&self) -> RowView;
}

// ============================================================================
// SINGLE ROW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRow {
    key: String,
    display_name: String,
    cells: Cells,
    total: i64,
}

impl SingleRow {
    pub fn new(key: &str, column_count: usize) -> Self {
        SingleRow {
            key: key.to_string(),
            display_name: key.to_string(),
            cells: smallvec![0; column_count],
            total: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, column: usize) -> Option<i64> {
        self.cells.get(column).copied()
    }

    pub fn cells(&self) -> Vec<i64> {
        self.cells.to_vec()
    }

    pub fn total_value(&self) -> i64 {
        self.total
    }

    pub fn unassigned_value(&self) -> i64 {
        self.total - self.cells.iter().sum::<i64>()
    }

    pub fn to_view(&self) -> RowView {
        RowView {
            key: self.key.clone(),
            display_name: self.display_name.clone(),
            cells: self.cells.to_vec(),
            total: self.total,
            children: Vec::new(),
        }
    }

    fn add_value(&mut self, value: i64, column: Option<usize>) {
        if let Some(cell) = column.and_then(|index| self.cells.get_mut(index)) {
            *cell += value;
        }
        self.total += value;
    }
}

impl<I: QueryItem + ?Sized> Row<I> for SingleRow {
    fn new_row(key: &str, column_count: usize) -> Self {
        SingleRow::new(key, column_count)
    }

    fn key(&self) -> &str {
        SingleRow::key(self)
    }

    fn display_name(&self) -> &str {
        SingleRow::display_name(self)
    }

    fn set_display_name(&mut self, display_name: String) {
        SingleRow::set_display_name(self, display_name);
    }

    fn add_item(&mut self, item: &I, column: Option<usize>) {
        self.add_value(item.value(), column);
    }

    fn column_count(&self) -> usize {
        SingleRow::column_count(self)
    }

    fn cell(&self, column: usize) -> Option<i64> {
        SingleRow::cell(self, column)
    }

    fn cells(&self) -> Vec<i64> {
        SingleRow::cells(self)
    }

    fn total_value(&self) -> i64 {
        self.total
    }

    fn unassigned_value(&self) -> i64 {
        SingleRow::unassigned_value(self)
    }

    fn to_view(&self) -> RowView {
        SingleRow::to_view(self)
    }
}

// ============================================================================
// FOLDABLE ROW
// ============================================================================

/// A row that also splits its values by the item's secondary key into
/// nested `SingleRow`s (drill-down). Nested rows are created on first use
/// and kept in first-seen order.
#[derive(Debug, Clone)]
pub struct FoldableRow {
    row: SingleRow,
    children: RowMap<SingleRow>,
}

impl FoldableRow {
    pub fn new(key: &str, column_count: usize) -> Self {
        FoldableRow {
            row: SingleRow::new(key, column_count),
            children: RowMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        self.row.key()
    }

    pub fn display_name(&self) -> &str {
        self.row.display_name()
    }

    pub fn set_display_name(&mut self, display_name: String) {
        self.row.set_display_name(display_name);
    }

    pub fn column_count(&self) -> usize {
        self.row.column_count()
    }

    pub fn cell(&self, column: usize) -> Option<i64> {
        self.row.cell(column)
    }

    pub fn cells(&self) -> Vec<i64> {
        self.row.cells()
    }

    pub fn total_value(&self) -> i64 {
        self.row.total_value()
    }

    pub fn unassigned_value(&self) -> i64 {
        self.row.unassigned_value()
    }

    pub fn foldable_row_count(&self) -> usize {
        self.children.len()
    }

    pub fn foldable_row(&self, key: &str) -> Option<&SingleRow> {
        self.children.get(key)
    }

    /// Renames a nested row. Returns false for an unknown key.
    pub fn set_foldable_display_name(&mut self, key: &str, display_name: impl Into<String>) -> bool {
        match self.children.get_mut(key) {
            Some(child) => {
                child.set_display_name(display_name.into());
                true
            }
            None => false,
        }
    }

    pub fn foldable_rows(&self) -> impl Iterator<Item = &SingleRow> {
        self.children.values()
    }

    pub fn foldable_row_keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys()
    }

    pub fn to_view(&self) -> RowView {
        let mut view = self.row.to_view();
        view.children = self.children.values().map(SingleRow::to_view).collect();
        view
    }

    fn add_value(&mut self, fold_key: &str, value: i64, column: Option<usize>) {
        let column_count = self.row.column_count();
        self.children
            .get_or_insert_with(fold_key, || SingleRow::new(fold_key, column_count))
            .add_value(value, column);
        self.row.add_value(value, column);
    }
}

impl<I: FoldableQueryItem + ?Sized> Row<I> for FoldableRow {
    fn new_row(key: &str, column_count: usize) -> Self {
        FoldableRow::new(key, column_count)
    }

    fn key(&self) -> &str {
        FoldableRow::key(self)
    }

    fn display_name(&self) -> &str {
        FoldableRow::display_name(self)
    }

    fn set_display_name(&mut self, display_name: String) {
        FoldableRow::set_display_name(self, display_name);
    }

    fn add_item(&mut self, item: &I, column: Option<usize>) {
        let fold_key = item.secondary_key().unwrap_or(DEFAULT_FOLD_KEY);
        self.add_value(fold_key, item.value(), column);
    }

    fn column_count(&self) -> usize {
        FoldableRow::column_count(self)
    }

    fn cell(&self, column: usize) -> Option<i64> {
        FoldableRow::cell(self, column)
    }

    fn cells(&self) -> Vec<i64> {
        FoldableRow::cells(self)
    }

    fn total_value(&self) -> i64 {
        FoldableRow::total_value(self)
    }

    fn unassigned_value(&self) -> i64 {
        FoldableRow::unassigned_value(self)
    }

    fn to_view(&self) -> RowView {
        FoldableRow::to_view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{DetailedMonitorQueryItem, MonitorQueryItem};

    fn detailed(key: &str, attachment: Option<&str>, value: i64) -> DetailedMonitorQueryItem {
        DetailedMonitorQueryItem::new(key, attachment.map(str::to_string), 0, value)
    }

    #[test]
    fn test_single_row_accumulates() {
        let mut row: SingleRow = Row::<MonitorQueryItem>::new_row("WB1", 3);
        row.add_item(&MonitorQueryItem::new("WB1", 0, 3), Some(0));
        row.add_item(&MonitorQueryItem::new("WB1", 0, 2), Some(2));
        row.add_item(&MonitorQueryItem::new("WB1", 0, 4), Some(2));

        assert_eq!(row.cells(), vec![3, 0, 6]);
        assert_eq!(row.total_value(), 9);
        assert_eq!(row.unassigned_value(), 0);
    }

    #[test]
    fn test_unmatched_item_only_counts_in_total() {
        let mut row = SingleRow::new("WB1", 2);
        row.add_item(&MonitorQueryItem::new("WB1", 0, 5), None);
        row.add_item(&MonitorQueryItem::new("WB1", 0, 1), Some(1));

        assert_eq!(row.cells(), vec![0, 1]);
        assert_eq!(row.total_value(), 6);
        assert_eq!(row.unassigned_value(), 5);
    }

    #[test]
    fn test_cells_are_a_copy() {
        let mut row = SingleRow::new("WB1", 2);
        row.add_item(&MonitorQueryItem::new("WB1", 0, 5), Some(0));

        let mut cells = row.cells();
        cells[0] = 999;

        assert_eq!(row.cells(), vec![5, 0]);
        assert_eq!(row.cell(0), Some(5));
        assert_eq!(row.cell(2), None);
    }

    #[test]
    fn test_display_name_defaults_to_key() {
        let mut row = SingleRow::new("WB1", 1);
        assert_eq!(row.display_name(), "WB1");
        Row::<MonitorQueryItem>::set_display_name(&mut row, "Workbasket One".to_string());
        assert_eq!(row.display_name(), "Workbasket One");
        assert_eq!(row.key(), "WB1");
    }

    #[test]
    fn test_foldable_row_splits_by_secondary_key() {
        let mut row = FoldableRow::new("L10000", 2);
        row.add_item(&detailed("L10000", Some("L20000"), 2), Some(0));
        row.add_item(&detailed("L10000", Some("L30000"), 3), Some(1));
        row.add_item(&detailed("L10000", Some("L20000"), 4), Some(1));
        row.add_item(&detailed("L10000", None, 1), Some(0));

        assert_eq!(row.foldable_row_count(), 3);
        assert_eq!(
            row.foldable_row_keys().collect::<Vec<_>>(),
            vec!["L20000", "L30000", DEFAULT_FOLD_KEY]
        );

        let child = row.foldable_row("L20000").unwrap();
        assert_eq!(child.cells(), vec![2, 4]);
        assert_eq!(child.total_value(), 6);

        let na = row.foldable_row(DEFAULT_FOLD_KEY).unwrap();
        assert_eq!(na.total_value(), 1);

        assert_eq!(row.cells(), vec![3, 7]);
        assert_eq!(row.total_value(), 10);
    }

    #[test]
    fn test_foldable_row_sums_children() {
        let mut row = FoldableRow::new("L10000", 3);
        let inputs = [
            (Some("A"), Some(0), 1),
            (Some("B"), Some(1), 2),
            (None, None, 7),
            (Some("A"), Some(2), 3),
            (Some("C"), None, 5),
        ];
        for (attachment, column, value) in inputs {
            row.add_item(&detailed("L10000", attachment, value), column);
        }

        let children: Vec<&SingleRow> = row.foldable_rows().collect();
        let child_total: i64 = children
            .iter()
            .map(|c| c.total_value())
            .sum();
        assert_eq!(row.total_value(), child_total);

        for column in 0..3 {
            let child_sum: i64 = children
                .iter()
                .map(|c| c.cell(column).unwrap())
                .sum();
            assert_eq!(row.cell(column), Some(child_sum));
        }
        assert_eq!(row.unassigned_value(), 12);
    }

    #[test]
    fn test_foldable_view_has_children() {
        let mut row = FoldableRow::new("L10000", 1);
        row.add_item(&detailed("L10000", Some("L20000"), 2), Some(0));

        let view = row.to_view();
        assert_eq!(view.total, 2);
        assert_eq!(view.children.len(), 1);
        assert_eq!(view.children[0].key, "L20000");
        assert_eq!(view.children[0].cells, vec![2]);
    }

    #[test]
    fn test_nested_display_name() {
        let mut row = FoldableRow::new("L10000", 1);
        row.add_item(&detailed("L10000", Some("L20000"), 2), Some(0));

        assert!(row.set_foldable_display_name("L20000", "Attachment"));
        assert!(!row.set_foldable_display_name("L99999", "Missing"));
        assert_eq!(row.foldable_row("L20000").unwrap().display_name(), "Attachment");
        assert_eq!(row.total_value(), 2);
    }
}
