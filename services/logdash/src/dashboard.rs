//! Web dashboard with the chart page and JSON API endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::error::LogdashError;
use crate::model::DashboardData;
use crate::page::{render_page, render_report};
use crate::source::{self, DataSource};

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub config: Arc<Config>,
    pub source: Arc<dyn DataSource>,
}

impl DashboardState {
    async fn data(&self) -> Result<DashboardData, ApiError> {
        source::load(self.source.as_ref(), &self.config.data)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load data from {}: {}", self.source.describe(), e);
                ApiError(e)
            })
    }
}

/// Error surfaced to HTTP clients as a 500 with the error text
struct ApiError(LogdashError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Build the dashboard axum router
pub fn build_router(config: Arc<Config>, source: Arc<dyn DataSource>) -> Router {
    let dashboard_state = DashboardState { config, source };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/charts", get(charts_handler))
        .route("/api/dashboard", get(data_handler))
        .route("/api/summary", get(summary_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(dashboard_state)
}

async fn index_handler(
    State(dashboard): State<DashboardState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = dashboard.data().await?;
    let page = render_page(&dashboard.config, &data).map_err(ApiError)?;
    tracing::debug!("Served dashboard with {} chart(s)", page.report.charts.len());
    Ok(Html(page.html))
}

async fn charts_handler(
    State(dashboard): State<DashboardState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = dashboard.data().await?;
    let report = render_report(&dashboard.config, &data).map_err(ApiError)?;

    Ok(axum::Json(report))
}

async fn data_handler(
    State(dashboard): State<DashboardState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(axum::Json(dashboard.data().await?))
}

async fn summary_handler(
    State(dashboard): State<DashboardState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(axum::Json(dashboard.data().await?.summary()))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
