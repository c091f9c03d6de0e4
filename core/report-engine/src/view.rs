//! FILENAME: core/report-engine/src/view.rs
//! Report View - Renderable output for the REST layer and table renderers.
//!
//! A finished report is flattened into plain serializable data:
//! - column titles in header order
//! - rows in first-seen order, each with its cells, total and nested rows
//! - the sum row across all rows

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One rendered row. `children` is only populated for foldable rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub key: String,
    pub display_name: String,
    pub cells: Vec<i64>,
    pub total: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    /// Descriptions of the row key levels, e.g. `["CLASSIFICATION", "ATTACHMENT"]`.
    pub row_desc: Vec<String>,
    pub column_headers: Vec<String>,
    pub rows: Vec<RowView>,
    pub sum_row: RowView,
}

impl ReportView {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn row(&self, key: &str) -> Option<&RowView> {
        self.rows.iter().find(|row| row.key == key)
    }
}
