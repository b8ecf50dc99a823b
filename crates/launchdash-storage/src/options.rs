//! Selection options derived once from the dataset: the distinct site list
//! for the site selector and the payload bounds for the default range.

use std::collections::BTreeSet;

use serde::Serialize;

use launchdash_core::constants::{ALL_SITES, ALL_SITES_LABEL};
use launchdash_core::{LaunchRecord, PayloadRange};

/// One entry of the site selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Options the UI controls are populated from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOptions {
    sites: Vec<String>,
    payload_bounds: Option<PayloadRange>,
}

impl SelectionOptions {
    pub fn derive(records: &[LaunchRecord]) -> Self {
        let sites: BTreeSet<&str> = records.iter().map(|r| r.site.as_str()).collect();

        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None::<PayloadRange>, |acc, mass| {
                Some(match acc {
                    None => PayloadRange::new(mass, mass),
                    Some(range) => PayloadRange::new(range.low.min(mass), range.high.max(mass)),
                })
            });

        Self {
            sites: sites.into_iter().map(str::to_string).collect(),
            payload_bounds,
        }
    }

    /// Distinct sites, sorted ascending.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Dataset-wide (min, max) payload mass. `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    /// Selector entries: "All Sites" first, then one per distinct site.
    pub fn site_options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(self.sites.iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }))
        .collect()
    }
}
