//! Success pie chart.

use launchdash_core::SiteFilter;

use super::{Figure, Layout, PieTrace, Trace};
use crate::aggregation::outcomes::OutcomeSummary;

/// Build the pie chart for a summary. An empty summary gives a trace with no
/// slices, which plotly renders as an empty chart.
pub fn pie_figure(summary: &OutcomeSummary, site: &SiteFilter) -> Figure {
    let title = match site {
        SiteFilter::All => "Total Success Launches By Site".to_string(),
        SiteFilter::Site(name) => format!("Total Success vs Failure for {name}"),
    };
    let (labels, values): (Vec<String>, Vec<usize>) = summary.slices().into_iter().unzip();

    Figure {
        data: vec![Trace::Pie(PieTrace { labels, values })],
        layout: Layout::titled(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use launchdash_core::Outcome;

    #[test]
    fn test_all_sites_title_and_slices() {
        let counts: BTreeMap<String, usize> =
            [("A".to_string(), 3), ("B".to_string(), 1)].into_iter().collect();
        let figure = pie_figure(&OutcomeSummary::BySite(counts), &SiteFilter::All);
        assert_eq!(figure.title(), "Total Success Launches By Site");
        let Trace::Pie(trace) = &figure.data[0] else {
            panic!("expected a pie trace");
        };
        assert_eq!(trace.labels, vec!["A", "B"]);
        assert_eq!(trace.values, vec![3, 1]);
    }

    #[test]
    fn test_site_title() {
        let counts: BTreeMap<Outcome, usize> = [(Outcome::Failure, 2)].into_iter().collect();
        let figure = pie_figure(&OutcomeSummary::ByOutcome(counts), &SiteFilter::from_value("A"));
        assert_eq!(figure.title(), "Total Success vs Failure for A");
    }

    #[test]
    fn test_empty_summary_serializes_as_empty_pie() {
        let figure = pie_figure(
            &OutcomeSummary::ByOutcome(BTreeMap::new()),
            &SiteFilter::from_value("nowhere"),
        );
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["labels"], serde_json::json!([]));
        assert_eq!(json["data"][0]["values"], serde_json::json!([]));
    }
}
