//! Stable error codes surfaced to logs and HTTP clients.

/// Every error type maps to a stable, machine-readable code.
pub trait DashErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const DATASET_IO: &str = "DATASET_IO";
pub const DATASET_PARSE: &str = "DATASET_PARSE";
pub const DATASET_INVALID_ROW: &str = "DATASET_INVALID_ROW";
pub const DATASET_EMPTY: &str = "DATASET_EMPTY";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const UNKNOWN_INPUT: &str = "UNKNOWN_INPUT";
pub const UNKNOWN_OUTPUT: &str = "UNKNOWN_OUTPUT";
