//! Dashboard renderer: capability check, then the timeline and hosts charts
//!
//! The two charts are independent. A surface that cannot be resolved, or a
//! capability that fails for one chart, only skips that chart.

use serde::{Deserialize, Serialize};

use crate::capability::{ChartInstance, ChartingCapability};
use crate::chart::{hosts_chart, timeline_chart, ChartConfig, ChartKind};
use crate::config::SurfacesConfig;
use crate::model::DashboardData;
use crate::surface::SurfaceResolver;
use crate::theme::Theme;

/// A chart that was created, together with the config it was created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub instance: ChartInstance,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    CapabilityUnavailable,
    SurfaceMissing,
    ChartFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedChart {
    pub surface: String,
    pub kind: ChartKind,
    pub reason: SkipReason,
}

/// Outcome of one render call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    pub charts: Vec<RenderedChart>,
    pub skipped: Vec<SkippedChart>,
}

impl RenderReport {
    pub fn rendered_kinds(&self) -> Vec<ChartKind> {
        self.charts.iter().map(|c| c.instance.kind).collect()
    }

    pub fn chart_for(&self, kind: ChartKind) -> Option<&RenderedChart> {
        self.charts.iter().find(|c| c.instance.kind == kind)
    }

    /// True when nothing was drawn because the capability was missing
    pub fn capability_unavailable(&self) -> bool {
        self.skipped
            .iter()
            .any(|s| s.reason == SkipReason::CapabilityUnavailable)
    }
}

/// Render the timeline and hosts charts.
///
/// Passing `None` for `capability` disables both charts; a warning is logged
/// and the report lists both charts as skipped. Nothing here returns an error.
pub fn render_dashboard(
    capability: Option<&dyn ChartingCapability>,
    surfaces: &dyn SurfaceResolver,
    targets: &SurfacesConfig,
    data: &DashboardData,
    theme: &Theme,
) -> RenderReport {
    let mut report = RenderReport::default();

    let Some(capability) = capability else {
        tracing::warn!("Charting library unavailable; dashboard charts disabled");
        for (surface, kind) in [
            (&targets.timeline, ChartKind::Line),
            (&targets.hosts, ChartKind::Bar),
        ] {
            report.skipped.push(SkippedChart {
                surface: surface.clone(),
                kind,
                reason: SkipReason::CapabilityUnavailable,
            });
        }
        return report;
    };

    render_one(
        capability,
        surfaces,
        &targets.timeline,
        || timeline_chart(&data.timeline, theme),
        &mut report,
    );
    render_one(
        capability,
        surfaces,
        &targets.hosts,
        || hosts_chart(&data.hosts, theme),
        &mut report,
    );

    tracing::debug!(
        "Rendered {} chart(s), skipped {}",
        report.charts.len(),
        report.skipped.len()
    );
    report
}

fn render_one(
    capability: &dyn ChartingCapability,
    surfaces: &dyn SurfaceResolver,
    surface_id: &str,
    build: impl FnOnce() -> ChartConfig,
    report: &mut RenderReport,
) {
    let config = build();

    let Some(surface) = surfaces.resolve(surface_id) else {
        tracing::debug!(
            "Surface '{}' not found; skipping {} chart",
            surface_id,
            config.kind
        );
        report.skipped.push(SkippedChart {
            surface: surface_id.to_string(),
            kind: config.kind,
            reason: SkipReason::SurfaceMissing,
        });
        return;
    };

    match capability.create_chart(&surface, &config) {
        Ok(instance) => report.charts.push(RenderedChart { instance, config }),
        Err(e) => {
            tracing::warn!(
                "Failed to create {} chart on '{}': {}",
                config.kind,
                surface_id,
                e
            );
            report.skipped.push(SkippedChart {
                surface: surface_id.to_string(),
                kind: config.kind,
                reason: SkipReason::ChartFailed,
            });
        }
    }
}
