//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

static INIT: Once = Once::new();

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
/// Later calls are no-ops.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.effective_level()));

        let registry = tracing_subscriber::registry().with(filter);
        // try_init: a host process may already have installed a subscriber.
        let _ = match config.effective_format() {
            LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
            LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        };
    });
}
