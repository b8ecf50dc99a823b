//! Shared constants for the dashboard.

/// Selector value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Display label for the [`ALL_SITES`] option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Fixed displayable bounds of the payload range control (kg).
pub const PAYLOAD_CONTROL_MIN: f64 = 0.0;
pub const PAYLOAD_CONTROL_MAX: f64 = 10_000.0;
pub const PAYLOAD_CONTROL_STEP: f64 = 1_000.0;
pub const PAYLOAD_MARK_INTERVAL: f64 = 2_500.0;

/// Default dataset file, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "launchdash.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "LAUNCHDASH_CONFIG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8050;

/// Dashboard heading shown on the page.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
