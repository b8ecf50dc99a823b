//! Payload range control configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    PAYLOAD_CONTROL_MAX, PAYLOAD_CONTROL_MIN, PAYLOAD_CONTROL_STEP, PAYLOAD_MARK_INTERVAL,
};
use crate::errors::ConfigError;

/// Bounds, step and tick marks of the payload range control.
/// These are display bounds; the default selected range comes from the data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower display bound (kg). Default: 0.
    pub min: Option<f64>,
    /// Upper display bound (kg). Default: 10000.
    pub max: Option<f64>,
    /// Step (kg). Default: 1000.
    pub step: Option<f64>,
    /// Distance between labelled marks (kg). Default: 2500.
    pub mark_interval: Option<f64>,
}

impl SliderConfig {
    pub fn effective_min(&self) -> f64 {
        self.min.unwrap_or(PAYLOAD_CONTROL_MIN)
    }

    pub fn effective_max(&self) -> f64 {
        self.max.unwrap_or(PAYLOAD_CONTROL_MAX)
    }

    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(PAYLOAD_CONTROL_STEP)
    }

    pub fn effective_mark_interval(&self) -> f64 {
        self.mark_interval.unwrap_or(PAYLOAD_MARK_INTERVAL)
    }

    /// Labelled mark positions from min to max inclusive.
    pub fn marks(&self) -> Vec<f64> {
        let (min, max, interval) = (
            self.effective_min(),
            self.effective_max(),
            self.effective_mark_interval(),
        );
        let mut marks = Vec::new();
        let mut i = 0u32;
        loop {
            let mark = min + f64::from(i) * interval;
            if mark > max {
                break;
            }
            marks.push(mark);
            i += 1;
        }
        marks
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.effective_min(), self.effective_max());
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::Invalid {
                field: "slider.min/slider.max".to_string(),
                message: format!("expected finite min < max, got {min} and {max}"),
            });
        }
        let step = self.effective_step();
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::Invalid {
                field: "slider.step".to_string(),
                message: format!("expected a positive step, got {step}"),
            });
        }
        let interval = self.effective_mark_interval();
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ConfigError::Invalid {
                field: "slider.mark_interval".to_string(),
                message: format!("expected a positive interval, got {interval}"),
            });
        }
        Ok(())
    }
}
