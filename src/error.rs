//! Error types for the geo-indicators library.

use thiserror::Error;

/// Result type alias for indicator operations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Errors that can occur while building tables or running stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Two columns share a name.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// Requested column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Column name does not follow the derived-column naming convention.
    #[error("invalid column name: {0}")]
    InvalidColumnName(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No table contains a column with the requested prefix.
    #[error("no column starts with prefix {0:?}")]
    ComponentNotFound(String),

    /// Two input columns would render the same output column name.
    #[error("columns {first:?} and {second:?} both produce {name:?}")]
    ColumnCollision {
        name: String,
        first: String,
        second: String,
    },

    /// A table does not share the time index of the first table.
    #[error("table {index} is not aligned with the first table's time index")]
    MisalignedTables { index: usize },
}
