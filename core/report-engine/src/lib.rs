//! FILENAME: core/report-engine/src/lib.rs
//! Monitor report aggregation engine.
//!
//! Takes query items that were already grouped and counted by the query
//! layer and folds them into a row x column report. It depends on
//! `working-time` only for the calendar and the working-day conversion.
//!
//! Layers:
//! - `item`: What goes in (keys, counts, ages, states)
//! - `header`: Which column an item belongs to
//! - `row` / `report`: HOW items are accumulated
//! - `preprocessor`: Item rewrites applied before insertion
//! - `builder` / `reports`: Report builds for the concrete report shapes
//! - `view`: WHAT the REST layer renders

pub mod error;
pub mod config;
pub mod item;
pub mod header;
pub mod row_map;
pub mod row;
pub mod report;
pub mod preprocessor;
pub mod builder;
pub mod reports;
pub mod view;
pub mod consensus;

pub use error::ReportError;
pub use config::{EngineConfig, ReportOptions};
pub use item::*;
pub use header::{
    interval_boundaries, CategoryColumnHeader, ColumnHeader, IntervalLabel,
    TaskStatusColumnHeader, TimeIntervalColumnHeader,
};
pub use row::{FoldableRow, Row, SingleRow, DEFAULT_FOLD_KEY};
pub use report::{Report, SUM_ROW_KEY};
pub use preprocessor::{DaysToWorkingDaysPreprocessor, PreprocessorPipeline, QueryItemPreprocessor};
pub use builder::{build_report, build_time_interval_report};
pub use reports::*;
pub use view::{ReportView, RowView};
pub use consensus::resolve_single_result;
