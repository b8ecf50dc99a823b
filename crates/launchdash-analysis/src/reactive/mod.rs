//! Reactive wiring: which outputs recompute when which input changes.
//!
//! Each [`callback::DashCallback`] declares its inputs and its single output.
//! The [`registry::CallbackRegistry`] indexes callbacks by input, and the
//! [`dispatcher::CallbackDispatcher`] runs exactly the callbacks that depend
//! on a changed input. Everything here is synchronous and stateless; the
//! host supplies the full current selection with every event.

pub mod callback;
pub mod dispatcher;
pub mod ids;
pub mod registry;
pub mod selection;

pub use callback::{DashCallback, PieChartCallback, ScatterChartCallback};
pub use dispatcher::{CallbackDispatcher, OutputUpdates};
pub use ids::{InputId, OutputId};
pub use registry::{CallbackRegistry, RegistryError};
pub use selection::normalize_selection;
