use arrow::{datatypes::DataType, error::ArrowError};
use fieldpresence_core::{BackendError, PresenceError, ValueTypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowBackendError {
    #[error("row {row} out of range for a batch of {num_rows} rows")]
    RowOutOfRange { row: usize, num_rows: usize },
    #[error("expected an IPC stream holding exactly one row, got {0}")]
    RowCount(usize),
    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedType { column: String, data_type: DataType },
    #[error("value type mismatch: {0}")]
    ValueType(#[from] ValueTypeError),
    #[error(transparent)]
    Presence(#[from] PresenceError),
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

impl ArrowBackendError {
    pub(crate) fn into_encode(self, record: &str) -> BackendError {
        match self {
            Self::Presence(e) => BackendError::Presence(e),
            other => BackendError::Encode {
                record: record.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub(crate) fn into_decode(self, record: &str) -> BackendError {
        match self {
            Self::Presence(e) => BackendError::Presence(e),
            other => BackendError::Decode {
                record: record.to_string(),
                source: Box::new(other),
            },
        }
    }
}
