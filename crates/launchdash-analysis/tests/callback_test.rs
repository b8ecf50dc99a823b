//! Reactive wiring: which outputs a given input change recomputes.

use launchdash_analysis::charts::Trace;
use launchdash_analysis::reactive::{
    normalize_selection, DashCallback, PieChartCallback, RegistryError,
};
use launchdash_analysis::{CallbackDispatcher, CallbackRegistry, Figure, InputId, OutputId};
use launchdash_core::config::SliderConfig;
use launchdash_core::{LaunchRecord, Outcome, PayloadRange, Selection, SiteFilter};
use launchdash_storage::Dataset;

fn dataset() -> Dataset {
    Dataset::from_records(vec![
        LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
        LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1"),
        LaunchRecord::new("B", 800.0, Outcome::Success, "v2"),
    ])
}

fn selection(site: &str, low: f64, high: f64) -> Selection {
    Selection::new(SiteFilter::from_value(site), PayloadRange::new(low, high))
}

#[test]
fn site_change_recomputes_both_charts() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let updates =
        dispatcher.dispatch(&dataset(), InputId::SiteDropdown, &selection("A", 0.0, 10_000.0));
    assert_eq!(
        updates.keys().copied().collect::<Vec<_>>(),
        vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
    );
    assert_eq!(
        updates[&OutputId::SuccessPieChart].title(),
        "Total Success vs Failure for A"
    );
}

#[test]
fn slider_change_recomputes_only_scatter() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let updates =
        dispatcher.dispatch(&dataset(), InputId::PayloadSlider, &selection("ALL", 0.0, 1000.0));
    assert_eq!(updates.len(), 1);
    let figure = &updates[&OutputId::SuccessPayloadScatterChart];
    let points: usize = figure
        .data
        .iter()
        .map(|t| match t {
            Trace::Scatter(s) => s.x.len(),
            Trace::Pie(_) => 0,
        })
        .sum();
    assert_eq!(points, 2);
}

#[test]
fn render_all_produces_every_output() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let updates = dispatcher.render_all(&dataset(), &selection("ALL", 500.0, 1500.0));
    assert_eq!(updates.len(), 2);
    assert_eq!(
        updates[&OutputId::SuccessPieChart].title(),
        "Total Success Launches By Site"
    );
}

#[test]
fn dispatch_is_idempotent() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let data = dataset();
    let sel = selection("B", 0.0, 9000.0);
    assert_eq!(
        dispatcher.dispatch(&data, InputId::SiteDropdown, &sel),
        dispatcher.dispatch(&data, InputId::SiteDropdown, &sel)
    );
}

/// A callback counting how often it runs.
struct CountingCallback(std::sync::atomic::AtomicUsize);

impl DashCallback for CountingCallback {
    fn output(&self) -> OutputId {
        OutputId::SuccessPayloadScatterChart
    }

    fn inputs(&self) -> &[InputId] {
        &[InputId::PayloadSlider, InputId::PayloadSlider]
    }

    fn compute(&self, dataset: &Dataset, selection: &Selection) -> Figure {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        PieChartCallback.compute(dataset, selection)
    }
}

#[test]
fn callback_listed_twice_for_an_input_runs_once() {
    let mut registry = CallbackRegistry::new();
    registry
        .register(Box::new(CountingCallback(Default::default())))
        .unwrap();
    assert_eq!(registry.callbacks_for(InputId::PayloadSlider).count(), 1);
    assert_eq!(registry.callbacks_for(InputId::SiteDropdown).count(), 0);

    let dispatcher = CallbackDispatcher::new(registry);
    let updates =
        dispatcher.dispatch(&dataset(), InputId::PayloadSlider, &selection("ALL", 0.0, 1.0));
    assert_eq!(updates.len(), 1);
}

#[test]
fn duplicate_output_is_rejected() {
    let mut registry = CallbackRegistry::with_defaults();
    let err = registry
        .register(Box::new(CountingCallback(Default::default())))
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::DuplicateOutput(OutputId::SuccessPayloadScatterChart)
    ));
}

#[test]
fn normalized_out_of_bounds_selection_still_renders() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let sel = normalize_selection(selection("ALL", -500.0, 50_000.0), &SliderConfig::default());
    assert_eq!(sel.payload_range, PayloadRange::new(0.0, 10_000.0));
    let updates = dispatcher.dispatch(&dataset(), InputId::PayloadSlider, &sel);
    assert!(updates.contains_key(&OutputId::SuccessPayloadScatterChart));
}

#[test]
fn output_updates_serialize_by_component_id() {
    let dispatcher = CallbackDispatcher::with_defaults();
    let updates = dispatcher.render_all(&dataset(), &selection("ALL", 0.0, 10_000.0));
    let json = serde_json::to_value(&updates).unwrap();
    assert!(json.get("success-pie-chart").is_some());
    assert_eq!(
        json["success-payload-scatter-chart"]["layout"]["xaxis"]["title"]["text"],
        "Payload Mass (kg)"
    );
}
