//! Error types for dataset loading and configuration.
//!
//! The transforms themselves are total and have no error type.

pub mod config_error;
pub mod dataset_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
