//! # launchdash-storage
//!
//! Dataset ingestion for the launch records dashboard.
//! The dataset is loaded once at startup and is read-only afterwards.

pub mod csv_reader;
pub mod dataset;
pub mod options;

pub use csv_reader::{load_csv, read_csv};
pub use dataset::Dataset;
pub use options::{SelectionOptions, SiteOption};
