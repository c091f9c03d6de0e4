//! FILENAME: core/report-engine/src/item.rs
//! Query Items - the pre-aggregated rows handed to a report.
//!
//! Each item is one grouped row of a monitor query: a row key, a count,
//! and whatever the report's columns need to place it (an age, a state,
//! a secondary key for drill-down). Capabilities are split into small
//! traits so headers and rows only ask for what they use.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CAPABILITIES
// ============================================================================

/// The minimum every item provides: which row it belongs to and how much
/// it contributes.
pub trait QueryItem {
    fn key(&self) -> &str;
    fn value(&self) -> i64;
}

/// Items bucketed by age. The age is rewritten once by the preprocessor
/// pipeline (calendar days to working days) and read-only afterwards.
pub trait AgeQueryItem: QueryItem {
    fn age_in_days(&self) -> i32;
    fn set_age_in_days(&mut self, age_in_days: i32);
}

/// Items placed into a nested row of a `FoldableRow`.
pub trait FoldableQueryItem: QueryItem {
    fn secondary_key(&self) -> Option<&str>;
}

/// Items placed into columns by a discrete value.
pub trait CategorizedQueryItem: QueryItem {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;
}

// ============================================================================
// TASK STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Ready,
    Claimed,
    Completed,
    Cancelled,
    Terminated,
}

impl TaskState {
    pub const ALL: [TaskState; 5] = [
        TaskState::Ready,
        TaskState::Claimed,
        TaskState::Completed,
        TaskState::Cancelled,
        TaskState::Terminated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Ready => "READY",
            TaskState::Claimed => "CLAIMED",
            TaskState::Completed => "COMPLETED",
            TaskState::Cancelled => "CANCELLED",
            TaskState::Terminated => "TERMINATED",
        }
    }

    /// Whether no further work can happen on a task in this state.
    pub fn is_end_state(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Cancelled | TaskState::Terminated
        )
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONCRETE ITEMS
// ============================================================================

/// Count of tasks per row key and age, used by workbasket and
/// classification reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorQueryItem {
    pub key: String,
    pub age_in_days: i32,
    pub value: i64,
}

impl MonitorQueryItem {
    pub fn new(key: impl Into<String>, age_in_days: i32, value: i64) -> Self {
        MonitorQueryItem {
            key: key.into(),
            age_in_days,
            value,
        }
    }
}

impl QueryItem for MonitorQueryItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> i64 {
        self.value
    }
}

impl AgeQueryItem for MonitorQueryItem {
    fn age_in_days(&self) -> i32 {
        self.age_in_days
    }

    fn set_age_in_days(&mut self, age_in_days: i32) {
        self.age_in_days = age_in_days;
    }
}

/// Like `MonitorQueryItem`, with the attachment classification key used
/// to fold the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedMonitorQueryItem {
    pub key: String,
    #[serde(default)]
    pub attachment_key: Option<String>,
    pub age_in_days: i32,
    pub value: i64,
}

impl DetailedMonitorQueryItem {
    pub fn new(
        key: impl Into<String>,
        attachment_key: Option<String>,
        age_in_days: i32,
        value: i64,
    ) -> Self {
        DetailedMonitorQueryItem {
            key: key.into(),
            attachment_key,
            age_in_days,
            value,
        }
    }
}

impl QueryItem for DetailedMonitorQueryItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> i64 {
        self.value
    }
}

impl AgeQueryItem for DetailedMonitorQueryItem {
    fn age_in_days(&self) -> i32 {
        self.age_in_days
    }

    fn set_age_in_days(&mut self, age_in_days: i32) {
        self.age_in_days = age_in_days;
    }
}

impl FoldableQueryItem for DetailedMonitorQueryItem {
    fn secondary_key(&self) -> Option<&str> {
        self.attachment_key.as_deref()
    }
}

/// Count of tasks per workbasket and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQueryItem {
    pub workbasket_key: String,
    pub state: TaskState,
    pub value: i64,
}

impl TaskQueryItem {
    pub fn new(workbasket_key: impl Into<String>, state: TaskState, value: i64) -> Self {
        TaskQueryItem {
            workbasket_key: workbasket_key.into(),
            state,
            value,
        }
    }
}

impl QueryItem for TaskQueryItem {
    fn key(&self) -> &str {
        &self.workbasket_key
    }

    fn value(&self) -> i64 {
        self.value
    }
}

impl CategorizedQueryItem for TaskQueryItem {
    type Category = TaskState;

    fn category(&self) -> &TaskState {
        &self.state
    }
}
