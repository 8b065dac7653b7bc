//! Logdash - error timeline and top-hosts dashboard for the log analyzer
//!
//! Renders two charts from log aggregates: a multi-series ERROR/WARNING
//! timeline and a per-host error bar chart. The charts are served as an HTML
//! page and as charting-library configs over a small JSON API.

pub mod capability;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod page;
pub mod renderer;
pub mod source;
pub mod surface;
pub mod theme;

pub use config::{load_config, Config};
pub use error::{LogdashError, Result};
pub use renderer::{render_dashboard, RenderReport};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Render the charts once and return the report as pretty-printed JSON
pub async fn render_charts_json(config: &Config) -> Result<String> {
    let source = source::source_from_config(&config.data);
    tracing::debug!("Loading dashboard data from {}", source.describe());
    let data = source::load(source.as_ref(), &config.data).await?;

    let report = page::render_report(config, &data)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Run the dashboard server with the given configuration
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;
    let cancel = CancellationToken::new();

    let source = source::source_from_config(&config.data);
    tracing::info!("Dashboard data source: {}", source.describe());
    if !config.charting.enabled {
        tracing::warn!("Charting disabled in configuration; pages will render without charts");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
        .parse()
        .map_err(|e| {
            LogdashError::Config(format!(
                "Invalid listen address {}:{}: {}",
                config.server.bind, config.server.port, e
            ))
        })?;

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let router = dashboard::build_router(Arc::new(config), source);
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        LogdashError::Dashboard(format!("Failed to bind dashboard to {}: {}", addr, e))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
