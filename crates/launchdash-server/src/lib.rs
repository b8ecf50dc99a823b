//! # launchdash-server
//!
//! HTTP host for the launch records dashboard. Serves the page, the control
//! layout, and the callback endpoint that recomputes charts on input changes.

pub mod errors;
pub mod handlers;
pub mod layout;
pub mod middleware;
pub mod runtime;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

pub use errors::{ServerError, ServerResult};
pub use runtime::DashRuntime;

/// Shared, read-only state handed to every handler.
pub type AppState = Arc<DashRuntime>;

/// Build the router with all routes and request logging.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/api/layout", get(handlers::api::layout))
        .route("/api/callback", post(handlers::api::callback))
        .route("/api/figure/:output", get(handlers::api::figure))
        .route("/api/health", get(handlers::api::health))
        .layer(axum::middleware::from_fn(middleware::logging::log_requests))
        .with_state(state)
}
