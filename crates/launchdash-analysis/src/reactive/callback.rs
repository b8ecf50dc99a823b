//! The two dashboard callbacks.

use launchdash_core::Selection;
use launchdash_storage::Dataset;

use super::ids::{InputId, OutputId};
use crate::aggregation::outcomes::summarize_outcomes;
use crate::aggregation::scatter::filter_by_payload_and_site;
use crate::charts::{pie_figure, scatter_figure, Figure};

/// A derived output: recomputed from the dataset and the current selection
/// whenever one of its inputs changes.
pub trait DashCallback: Send + Sync {
    /// The output this callback produces. Unique within a registry.
    fn output(&self) -> OutputId;

    /// Inputs whose change triggers this callback.
    fn inputs(&self) -> &[InputId];

    fn compute(&self, dataset: &Dataset, selection: &Selection) -> Figure;
}

/// Site dropdown → success pie chart.
pub struct PieChartCallback;

impl DashCallback for PieChartCallback {
    fn output(&self) -> OutputId {
        OutputId::SuccessPieChart
    }

    fn inputs(&self) -> &[InputId] {
        &[InputId::SiteDropdown]
    }

    fn compute(&self, dataset: &Dataset, selection: &Selection) -> Figure {
        let summary = summarize_outcomes(dataset, &selection.site);
        pie_figure(&summary, &selection.site)
    }
}

/// Site dropdown + payload slider → payload scatter chart.
pub struct ScatterChartCallback;

impl DashCallback for ScatterChartCallback {
    fn output(&self) -> OutputId {
        OutputId::SuccessPayloadScatterChart
    }

    fn inputs(&self) -> &[InputId] {
        &[InputId::SiteDropdown, InputId::PayloadSlider]
    }

    fn compute(&self, dataset: &Dataset, selection: &Selection) -> Figure {
        let rows = filter_by_payload_and_site(dataset, &selection.site, selection.payload_range);
        scatter_figure(&rows, &selection.site)
    }
}
