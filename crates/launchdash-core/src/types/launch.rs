//! Launch records and their binary outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary launch result. The source data encodes it as `class` 1/0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode the `class` column. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Self::Success),
            0 => Some(Self::Failure),
            _ => None,
        }
    }

    /// The `class` encoding (1 = success, 0 = failure).
    pub fn as_class(self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Flight number, when the source provides one.
    pub flight_number: Option<u32>,
    /// Launch site identifier.
    pub site: String,
    /// Payload mass in kilograms (non-negative).
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Full booster version, when the source provides one.
    pub booster_version: Option<String>,
    /// Booster category, used only for chart coloring.
    pub booster_category: String,
}

impl LaunchRecord {
    /// Build a record with only the fields the dashboard filters and colors on.
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_category: booster_category.into(),
        }
    }
}
