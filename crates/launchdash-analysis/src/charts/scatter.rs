//! Payload vs. outcome scatter chart, colored by booster category.

use launchdash_core::SiteFilter;

use super::{Axis, Figure, Layout, Legend, ScatterTrace, Title, Trace};
use crate::aggregation::scatter::ScatterRows;

/// One trace per booster category, in order of first appearance; points keep
/// their row order within each trace.
pub fn scatter_figure(rows: &ScatterRows, site: &SiteFilter) -> Figure {
    let title = match site {
        SiteFilter::All => "Payload vs. Success for All Sites".to_string(),
        SiteFilter::Site(name) => format!("Payload vs. Success for {name}"),
    };

    let mut traces: Vec<ScatterTrace> = Vec::new();
    for record in rows.rows() {
        let idx = match traces.iter().position(|t| t.name == record.booster_category) {
            Some(idx) => idx,
            None => {
                traces.push(ScatterTrace {
                    name: record.booster_category.clone(),
                    mode: "markers",
                    x: Vec::new(),
                    y: Vec::new(),
                    text: Vec::new(),
                });
                traces.len() - 1
            }
        };
        let trace = &mut traces[idx];
        trace.x.push(record.payload_mass_kg);
        trace.y.push(record.outcome.as_class());
        trace.text.push(
            record
                .booster_version
                .clone()
                .unwrap_or_else(|| record.site.clone()),
        );
    }

    let mut layout = Layout::titled(title);
    layout.xaxis = Some(Axis::titled("Payload Mass (kg)"));
    layout.yaxis = Some(Axis::titled("class"));
    layout.legend = Some(Legend {
        title: Title {
            text: "Booster Version Category".to_string(),
        },
    });

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout,
    }
}
