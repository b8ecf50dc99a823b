//! Launch records dashboard server.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use launchdash_core::tracing::init_tracing;
use launchdash_core::DashConfig;
use launchdash_server::DashRuntime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashConfig::load_from_env().context("failed to load configuration")?;
    init_tracing(&config.logging);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting launch records dashboard");

    let runtime = DashRuntime::initialize(config).context("failed to load launch dataset")?;
    let addr = runtime.config().server.bind_address();
    let app = launchdash_server::app(Arc::new(runtime));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(address = %addr, "Dashboard listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
