//! FILENAME: core/report-engine/src/error.rs

use thiserror::Error;
use working_time::TimeError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid interval header: lower limit {lower} is greater than upper limit {upper}")]
    InvalidInterval { lower: i32, upper: i32 },

    #[error("Configuration error: {0}")]
    Configuration(#[from] TimeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
