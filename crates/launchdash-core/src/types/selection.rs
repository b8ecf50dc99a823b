//! The user's current selection: a site filter and a payload range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ALL_SITES;

/// Site selector value. `"ALL"` maps to [`SiteFilter::All`]; any other string
/// is an exact-match filter, whether or not the site exists in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    /// The value as the selector reports it.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<&str> for SiteFilter {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> Self {
        match filter {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Inclusive payload mass range in kilograms.
///
/// An inverted range (`low > high`) is legal and matches nothing.
/// Serialized as a two-element array, the way the range control reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `low <= mass <= high`.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Clamp both ends into `[min, max]`. An inverted range is returned
    /// unchanged: clamping both ends to the same bound would turn it into a
    /// valid single-point range.
    pub fn clamp_to(&self, min: f64, max: f64) -> Self {
        if self.is_inverted() {
            return *self;
        }
        Self {
            low: self.low.clamp(min, max),
            high: self.high.clamp(min, max),
        }
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// One UI interaction's worth of input values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteFilter, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_filter_sentinel() {
        assert_eq!(SiteFilter::from_value("ALL"), SiteFilter::All);
        assert_eq!(
            SiteFilter::from_value("KSC LC-39A"),
            SiteFilter::Site("KSC LC-39A".to_string())
        );
        // Case-sensitive: only the exact sentinel selects every site.
        assert_eq!(
            SiteFilter::from_value("all"),
            SiteFilter::Site("all".to_string())
        );
    }

    #[test]
    fn test_site_filter_matches() {
        assert!(SiteFilter::All.matches("anything"));
        let filter = SiteFilter::from_value("A");
        assert!(filter.matches("A"));
        assert!(!filter.matches("B"));
    }

    #[test]
    fn test_site_filter_serde_as_plain_string() {
        let json = serde_json::to_string(&SiteFilter::All).unwrap();
        assert_eq!(json, "\"ALL\"");
        let back: SiteFilter = serde_json::from_str("\"CCAFS LC-40\"").unwrap();
        assert_eq!(back, SiteFilter::Site("CCAFS LC-40".to_string()));
    }

    #[test]
    fn test_payload_range_inclusive_bounds() {
        let range = PayloadRange::new(500.0, 1500.0);
        assert!(range.contains(500.0));
        assert!(range.contains(1500.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(1500.1));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PayloadRange::new(2000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(!range.contains(1500.0));
        assert!(!range.contains(1000.0));
        assert!(!range.contains(2000.0));
    }

    #[test]
    fn test_clamp_preserves_inversion() {
        let clamped = PayloadRange::new(-50.0, 20_000.0).clamp_to(0.0, 10_000.0);
        assert_eq!(clamped, PayloadRange::new(0.0, 10_000.0));
        let inverted = PayloadRange::new(12_000.0, 3_000.0).clamp_to(0.0, 10_000.0);
        assert!(inverted.is_inverted());
    }

    #[test]
    fn test_clamp_keeps_inversion_outside_one_bound() {
        let below = PayloadRange::new(-50.0, -100.0).clamp_to(0.0, 10_000.0);
        assert!(below.is_inverted());
        assert!(!below.contains(0.0));

        let above = PayloadRange::new(12_000.0, 11_000.0).clamp_to(0.0, 10_000.0);
        assert!(above.is_inverted());
        assert!(!above.contains(10_000.0));
    }

    #[test]
    fn test_payload_range_serde_as_pair() {
        let range: PayloadRange = serde_json::from_str("[0, 9600]").unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 9600.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,9600.0]");
    }
}
