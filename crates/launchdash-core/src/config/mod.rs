//! Dashboard configuration, loaded from `launchdash.toml`.

pub mod dataset_config;
pub mod logging_config;
pub mod server_config;
pub mod slider_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dataset_config::DatasetConfig;
pub use logging_config::{LogFormat, LoggingConfig};
pub use server_config::ServerConfig;
pub use slider_config::SliderConfig;

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::errors::ConfigError;

/// Top-level configuration. Every section and field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashConfig {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
    pub slider: SliderConfig,
    pub logging: LoggingConfig,
}

impl DashConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Load from `$LAUNCHDASH_CONFIG`, falling back to `./launchdash.toml`.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(Path::new(&path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slider.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = DashConfig::from_toml("").unwrap();
        assert_eq!(config.server.effective_port(), 8050);
        assert_eq!(config.server.effective_host(), "0.0.0.0");
        assert_eq!(config.dataset.effective_path(), "spacex_launch_dash.csv");
        assert_eq!(config.slider.effective_min(), 0.0);
        assert_eq!(config.slider.effective_max(), 10_000.0);
        assert_eq!(config.slider.effective_step(), 1_000.0);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = DashConfig::from_toml(
            r#"
            [dataset]
            path = "data/launches.csv"

            [server]
            host = "127.0.0.1"
            port = 9000

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.effective_path(), "data/launches.csv");
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.logging.effective_level(), "debug");
        assert_eq!(config.logging.effective_format(), LogFormat::Json);
    }

    #[test]
    fn test_invalid_slider_rejected() {
        let err = DashConfig::from_toml("[slider]\nmin = 500.0\nmax = 100.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = DashConfig::from_toml("[slider]\nstep = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = DashConfig::from_toml("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.effective_port(), 8050);
    }
}
