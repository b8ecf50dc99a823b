//! Outcome summaries feeding the success pie chart.
//!
//! Two genuinely different aggregations share one entry point:
//! - every site: successful launches counted per site;
//! - one site: that site's launches counted per outcome.
//!
//! Only observed counts are reported. A site with no successes, or an outcome
//! that never occurred at the selected site, has no entry at all.

use std::collections::BTreeMap;

use serde::Serialize;

use launchdash_core::{Outcome, SiteFilter};
use launchdash_storage::Dataset;

/// Counts for the pie chart. The variant follows the site filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "counts", rename_all = "snake_case")]
pub enum OutcomeSummary {
    /// Site → number of successful launches (site filter was "ALL").
    BySite(BTreeMap<String, usize>),
    /// Outcome → number of launches at the selected site.
    ByOutcome(BTreeMap<Outcome, usize>),
}

impl OutcomeSummary {
    /// Sum of all counts.
    pub fn total(&self) -> usize {
        match self {
            Self::BySite(counts) => counts.values().sum(),
            Self::ByOutcome(counts) => counts.values().sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::BySite(counts) => counts.is_empty(),
            Self::ByOutcome(counts) => counts.is_empty(),
        }
    }

    /// Pie labels and values, in key order.
    pub fn slices(&self) -> Vec<(String, usize)> {
        match self {
            Self::BySite(counts) => counts.iter().map(|(site, n)| (site.clone(), *n)).collect(),
            Self::ByOutcome(counts) => counts
                .iter()
                .map(|(outcome, n)| (outcome.to_string(), *n))
                .collect(),
        }
    }
}

/// Summarize launch outcomes for the selected site.
///
/// A site that matches nothing yields an empty `ByOutcome` summary.
pub fn summarize_outcomes(dataset: &Dataset, site: &SiteFilter) -> OutcomeSummary {
    match site {
        SiteFilter::All => {
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for record in dataset.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(record.site.clone()).or_default() += 1;
            }
            OutcomeSummary::BySite(counts)
        }
        SiteFilter::Site(selected) => {
            let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
            for record in dataset.iter().filter(|r| &r.site == selected) {
                *counts.entry(record.outcome).or_default() += 1;
            }
            OutcomeSummary::ByOutcome(counts)
        }
    }
}
