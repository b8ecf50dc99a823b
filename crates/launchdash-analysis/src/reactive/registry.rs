//! Callback registry, indexed by input.

use std::collections::HashMap;

use super::callback::{DashCallback, PieChartCallback, ScatterChartCallback};
use super::ids::{InputId, OutputId};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Output {0} already has a callback")]
    DuplicateOutput(OutputId),
}

/// Holds callbacks and the input → callback index.
pub struct CallbackRegistry {
    callbacks: Vec<Box<dyn DashCallback>>,
    /// Map from input → indices into `callbacks`.
    by_input: HashMap<InputId, Vec<usize>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            by_input: HashMap::new(),
        }
    }

    /// Registry with the pie and scatter callbacks.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [Box<dyn DashCallback>; 2] =
            [Box::new(PieChartCallback), Box::new(ScatterChartCallback)];
        for callback in defaults {
            registry.insert(callback);
        }
        registry
    }

    /// Register a callback. Each output may be produced by one callback only.
    pub fn register(&mut self, callback: Box<dyn DashCallback>) -> Result<(), RegistryError> {
        let output = callback.output();
        if self.callbacks.iter().any(|c| c.output() == output) {
            return Err(RegistryError::DuplicateOutput(output));
        }
        self.insert(callback);
        Ok(())
    }

    /// Callbacks that depend on `input`, in registration order.
    pub fn callbacks_for(&self, input: InputId) -> impl Iterator<Item = &dyn DashCallback> {
        self.by_input
            .get(&input)
            .into_iter()
            .flatten()
            .map(|&idx| self.callbacks[idx].as_ref())
    }

    pub fn callbacks(&self) -> impl Iterator<Item = &dyn DashCallback> {
        self.callbacks.iter().map(|c| c.as_ref())
    }

    pub fn get(&self, output: OutputId) -> Option<&dyn DashCallback> {
        self.callbacks
            .iter()
            .find(|c| c.output() == output)
            .map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    fn insert(&mut self, callback: Box<dyn DashCallback>) {
        let idx = self.callbacks.len();
        for input in callback.inputs() {
            let indices = self.by_input.entry(*input).or_default();
            // An input listed twice still triggers the callback once.
            if !indices.contains(&idx) {
                indices.push(idx);
            }
        }
        self.callbacks.push(callback);
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring() {
        let registry = CallbackRegistry::with_defaults();
        assert_eq!(registry.len(), 2);

        let site: Vec<OutputId> = registry
            .callbacks_for(InputId::SiteDropdown)
            .map(|c| c.output())
            .collect();
        assert_eq!(
            site,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );

        let slider: Vec<OutputId> = registry
            .callbacks_for(InputId::PayloadSlider)
            .map(|c| c.output())
            .collect();
        assert_eq!(slider, vec![OutputId::SuccessPayloadScatterChart]);
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let mut registry = CallbackRegistry::with_defaults();
        let err = registry.register(Box::new(PieChartCallback)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateOutput(OutputId::SuccessPieChart)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry_triggers_nothing() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callbacks_for(InputId::PayloadSlider).count(), 0);
    }
}
