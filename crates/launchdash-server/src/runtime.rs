//! DashRuntime: the dataset, the callback dispatcher and the config,
//! assembled once at startup and shared read-only by every request.

use std::path::Path;

use tracing::{error, info};

use launchdash_analysis::CallbackDispatcher;
use launchdash_core::{DashConfig, DashErrorCode, DatasetError};
use launchdash_storage::Dataset;

use crate::layout::DashboardLayout;

pub struct DashRuntime {
    dataset: Dataset,
    dispatcher: CallbackDispatcher,
    layout: DashboardLayout,
    config: DashConfig,
}

impl DashRuntime {
    /// Load the configured dataset. Any dataset error aborts startup.
    pub fn initialize(config: DashConfig) -> Result<Self, DatasetError> {
        let path = config.dataset.effective_path().to_string();
        let dataset = launchdash_storage::load_csv(Path::new(&path)).map_err(|e| {
            error!(
                path = %path,
                code = e.error_code(),
                error = %e,
                "Failed to load launch dataset"
            );
            e
        })?;
        Ok(Self::from_dataset(dataset, config))
    }

    /// Assemble around an already-loaded dataset.
    pub fn from_dataset(dataset: Dataset, config: DashConfig) -> Self {
        let layout = DashboardLayout::build(dataset.options(), &config.slider);
        info!(
            records = dataset.len(),
            sites = dataset.options().sites().len(),
            "Dashboard runtime ready"
        );
        Self {
            dataset,
            dispatcher: CallbackDispatcher::with_defaults(),
            layout,
            config,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dispatcher(&self) -> &CallbackDispatcher {
        &self.dispatcher
    }

    /// Control layout, derived once from the dataset and slider config.
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn config(&self) -> &DashConfig {
        &self.config
    }
}
