//! Routes an input change to the callbacks that depend on it.

use std::collections::BTreeMap;

use tracing::debug;

use launchdash_core::Selection;
use launchdash_storage::Dataset;

use super::ids::{InputId, OutputId};
use super::registry::CallbackRegistry;
use crate::charts::Figure;

/// Recomputed figures keyed by output.
pub type OutputUpdates = BTreeMap<OutputId, Figure>;

/// Runs callbacks against the dataset. Holds no selection state: every call
/// receives the complete current selection, so repeated or stale events are
/// harmless.
pub struct CallbackDispatcher {
    registry: CallbackRegistry,
}

impl CallbackDispatcher {
    pub fn new(registry: CallbackRegistry) -> Self {
        Self { registry }
    }

    pub fn with_defaults() -> Self {
        Self::new(CallbackRegistry::with_defaults())
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// Recompute every output that depends on `input`, each exactly once.
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        input: InputId,
        selection: &Selection,
    ) -> OutputUpdates {
        let updates: OutputUpdates = self
            .registry
            .callbacks_for(input)
            .map(|callback| (callback.output(), callback.compute(dataset, selection)))
            .collect();

        debug!(
            input = %input,
            site = %selection.site,
            low = selection.payload_range.low,
            high = selection.payload_range.high,
            outputs = updates.len(),
            "Callbacks dispatched"
        );
        updates
    }

    /// Compute every registered output (initial page render).
    pub fn render_all(&self, dataset: &Dataset, selection: &Selection) -> OutputUpdates {
        self.registry
            .callbacks()
            .map(|callback| (callback.output(), callback.compute(dataset, selection)))
            .collect()
    }

    /// Compute a single output, if some callback produces it.
    pub fn render(
        &self,
        dataset: &Dataset,
        output: OutputId,
        selection: &Selection,
    ) -> Option<Figure> {
        self.registry
            .get(output)
            .map(|callback| callback.compute(dataset, selection))
    }
}

impl Default for CallbackDispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
