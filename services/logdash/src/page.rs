//! HTML host document for the dashboard
//!
//! The page declares one canvas per configured surface and runs the rendered
//! chart script once the document is ready. The browser repeats the
//! capability check: if the charting library failed to load it logs a
//! console warning and draws nothing.

use crate::capability::{ChartingCapability, ScriptCapability};
use crate::config::Config;
use crate::error::Result;
use crate::model::{DashboardData, Summary};
use crate::renderer::{render_dashboard, RenderReport};
use crate::surface::SurfaceSet;

/// A rendered page together with the render outcome behind it
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub report: RenderReport,
}

/// Surfaces the page template declares
pub fn page_surfaces(config: &Config) -> SurfaceSet {
    SurfaceSet::new([
        config.surfaces.timeline.as_str(),
        config.surfaces.hosts.as_str(),
    ])
}

/// Render both charts against the page's surfaces without building the page
pub fn render_report(config: &Config, data: &DashboardData) -> Result<RenderReport> {
    render_charts(config, data).map(|(_, report)| report)
}

/// Render the full dashboard page for `data`
pub fn render_page(config: &Config, data: &DashboardData) -> Result<Page> {
    let (capability, report) = render_charts(config, data)?;
    let script = capability.map(ScriptCapability::into_script).transpose()?;

    let html = document(config, &data.summary(), script.as_deref());
    Ok(Page { html, report })
}

fn render_charts(
    config: &Config,
    data: &DashboardData,
) -> Result<(Option<ScriptCapability>, RenderReport)> {
    config.validate()?;
    let capability = config.charting.enabled.then(ScriptCapability::new);
    let report = render_dashboard(
        capability
            .as_ref()
            .map(|c| c as &dyn ChartingCapability),
        &page_surfaces(config),
        &config.surfaces,
        data,
        &config.theme,
    );
    Ok((capability, report))
}

fn document(config: &Config, summary: &Summary, chart_script: Option<&str>) -> String {
    let title = escape_html(&config.title);
    let window = match (&summary.first_bucket, &summary.last_bucket) {
        (Some(first), Some(last)) => format!("{} – {}", escape_html(first), escape_html(last)),
        _ => "No data".to_string(),
    };

    let scripts = match chart_script {
        Some(statements) => format!(
            r#"<script src="{url}"></script>
    <script>
        document.addEventListener('DOMContentLoaded', function () {{
            if (typeof Chart === 'undefined') {{
                console.warn('Chart.js not loaded; dashboard charts disabled');
                return;
            }}
{statements}
        }});
    </script>"#,
            url = escape_html(&config.charting.script_url),
            statements = statements,
        ),
        None => String::new(),
    };

    let notice = if chart_script.is_none() {
        r#"<p id="charts-disabled" style="color: #f59e0b;">Charts are disabled.</p>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    {scripts}
</head>
<body style="font-family: system-ui, sans-serif; background: #111827; color: #e5e7eb; max-width: 1200px; margin: 0 auto; padding: 1rem;">
    <h1>{title}</h1>
    <section style="display: flex; gap: 1rem; margin-bottom: 1.5rem;">
        <div style="flex: 1; padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <div style="color: #9ca3af; font-size: 0.85em;">Total</div>
            <div id="summary-total" style="font-size: 1.5em; font-weight: 600;">{total}</div>
        </div>
        <div style="flex: 1; padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <div style="color: #9ca3af; font-size: 0.85em;">Errors</div>
            <div id="summary-errors" style="font-size: 1.5em; font-weight: 600; color: #ef4444;">{errors}</div>
        </div>
        <div style="flex: 1; padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <div style="color: #9ca3af; font-size: 0.85em;">Warnings</div>
            <div id="summary-warnings" style="font-size: 1.5em; font-weight: 600; color: #f59e0b;">{warnings}</div>
        </div>
        <div style="flex: 1; padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <div style="color: #9ca3af; font-size: 0.85em;">Window</div>
            <div id="summary-window" style="font-size: 1.1em;">{window}</div>
        </div>
    </section>
    {notice}
    <section style="display: grid; grid-template-columns: 2fr 1fr; gap: 1rem;">
        <div style="padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <h2 style="font-size: 1em; color: #d1d5db;">Errors &amp; Warnings</h2>
            <div style="position: relative; height: 300px;"><canvas id="{timeline_id}"></canvas></div>
        </div>
        <div style="padding: 1rem; background: #1f2937; border-radius: 0.5rem;">
            <h2 style="font-size: 1em; color: #d1d5db;">Top Hosts</h2>
            <div style="position: relative; height: 300px;"><canvas id="{hosts_id}"></canvas></div>
        </div>
    </section>
</body>
</html>"#,
        title = title,
        scripts = scripts,
        total = summary.total,
        errors = summary.errors,
        warnings = summary.warnings,
        window = window,
        notice = notice,
        timeline_id = escape_html(&config.surfaces.timeline),
        hosts_id = escape_html(&config.surfaces.hosts),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
