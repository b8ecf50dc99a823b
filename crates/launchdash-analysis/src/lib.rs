//! # launchdash-analysis
//!
//! The dashboard's derived data: outcome summaries and payload/site filtering
//! over the immutable dataset, the chart specs built from them, and the
//! callback registry that maps UI input changes to recomputed outputs.
//!
//! The transforms are pure functions of `(&Dataset, selection)` and know
//! nothing about the reactive layer or HTTP.

pub mod aggregation;
pub mod charts;
pub mod reactive;

pub use aggregation::outcomes::{summarize_outcomes, OutcomeSummary};
pub use aggregation::scatter::{filter_by_payload_and_site, ScatterRows};
pub use charts::Figure;
pub use reactive::dispatcher::CallbackDispatcher;
pub use reactive::ids::{InputId, OutputId};
pub use reactive::registry::CallbackRegistry;
