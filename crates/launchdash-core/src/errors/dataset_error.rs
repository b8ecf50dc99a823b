//! Dataset loading errors. Any of these aborts startup.

use super::error_code::{self, DashErrorCode};

/// Errors that can occur while loading the launch dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed CSV at row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid outcome class at row {row}: {value} (expected 0 or 1)")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("Invalid payload mass at row {row}: {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("Empty launch site at row {row}")]
    EmptySite { row: usize },

    #[error("Dataset contains no records")]
    Empty,
}

impl DashErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::DATASET_IO,
            Self::Csv { .. } | Self::MissingColumn { .. } => error_code::DATASET_PARSE,
            Self::InvalidOutcome { .. } | Self::InvalidPayload { .. } | Self::EmptySite { .. } => {
                error_code::DATASET_INVALID_ROW
            }
            Self::Empty => error_code::DATASET_EMPTY,
        }
    }
}
