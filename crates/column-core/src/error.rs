// File: crates/column-core/src/error.rs
// Summary: Error type for dataset and settings construction. Rendering itself never fails.

use thiserror::Error;

/// Errors raised while building chart inputs.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The dataset has no records.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A record carries no category field.
    #[error("record {index} has no fields")]
    EmptyRecord { index: usize },

    /// A record's field count or ordering differs from the first record.
    #[error("record {index} has {found} series values, expected {expected}")]
    RaggedRecord {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A record's field name differs from the first record at the same position.
    #[error("record {index} has field `{found}` where `{expected}` was expected")]
    FieldMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    /// A series value could not be read as a number.
    #[error("record {index} field `{field}` is not numeric: {value}")]
    NonNumeric {
        index: usize,
        field: String,
        value: String,
    },

    /// The JSON document does not have the expected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for chart input construction.
pub type ChartResult<T> = Result<T, ChartError>;
