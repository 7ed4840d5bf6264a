//! HTTP serve loop

use crate::config::AppConfig;
use anyhow::{Context, Result};
use employee_service::EmployeeServiceModule;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Application router with request tracing
pub fn build_router(module: &EmployeeServiceModule) -> axum::Router {
    module.router().layer(TraceLayer::new_for_http())
}

/// Initialize the module and serve until Ctrl-C
pub async fn run(config: AppConfig) -> Result<()> {
    let module = EmployeeServiceModule::init(&config.employee_service).await?;
    let app = build_router(&module);

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "employee server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("employee server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
