use thiserror::Error;

use crate::store::ColumnKind;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Malformed record: missing value for column '{0}'")]
    MalformedRecord(String),

    #[error("Type mismatch for column '{column}': expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: ColumnKind,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Row index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Timestamp of sample {index} is outside the representable range")]
    TimestampOutOfRange { index: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;
