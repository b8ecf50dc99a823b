//! Dataset source configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DATASET_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the launch CSV. Default: "spacex_launch_dash.csv".
    pub path: Option<String>,
}

impl DatasetConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_DATASET_PATH)
    }
}
