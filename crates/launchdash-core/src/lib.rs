//! # launchdash-core
//!
//! Foundation crate for the launch records dashboard.
//! Defines the record and selection types, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DashConfig;
pub use errors::error_code::DashErrorCode;
pub use errors::{ConfigError, DatasetError};
pub use types::launch::{LaunchRecord, Outcome};
pub use types::selection::{PayloadRange, Selection, SiteFilter};
