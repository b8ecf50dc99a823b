//! Payload/site filtering feeding the payload-vs-outcome scatter chart.

use serde::Serialize;

use launchdash_core::{LaunchRecord, PayloadRange, SiteFilter};
use launchdash_storage::Dataset;

/// Records that passed the payload and site filters, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterRows {
    rows: Vec<LaunchRecord>,
}

impl ScatterRows {
    pub fn rows(&self) -> &[LaunchRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<LaunchRecord> {
        self.rows
    }
}

/// Keep records with `low <= payload <= high`, then, unless the filter is
/// "ALL", only those at the selected site. Dataset order is preserved.
///
/// An inverted range matches nothing.
pub fn filter_by_payload_and_site(
    dataset: &Dataset,
    site: &SiteFilter,
    range: PayloadRange,
) -> ScatterRows {
    let rows = dataset
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.site))
        .cloned()
        .collect();
    ScatterRows { rows }
}
