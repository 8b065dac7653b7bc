//! BDD step definitions for the rendering feature

use std::collections::HashSet;
use std::sync::Arc;

use cucumber::{given, then, when};

use logdash::capability::ChartingCapability;
use logdash::chart::ChartKind;
use logdash::config::SurfacesConfig;
use logdash::fixtures;
use logdash::render_dashboard;
use logdash::renderer::SkipReason;
use logdash::surface::SurfaceSet;
use logdash::theme::Theme;

use crate::world::{LogdashWorld, RecordingCapability};

fn parse_kind(s: &str) -> ChartKind {
    match s {
        "line" => ChartKind::Line,
        "bar" => ChartKind::Bar,
        other => panic!("Unknown chart kind: {}", other),
    }
}

fn parse_reason(s: &str) -> SkipReason {
    match s {
        "the charting library is unavailable" => SkipReason::CapabilityUnavailable,
        "its surface is missing" => SkipReason::SurfaceMissing,
        "chart creation failed" => SkipReason::ChartFailed,
        other => panic!("Unknown skip reason: {}", other),
    }
}

#[given("the sample dashboard data")]
fn sample_data(world: &mut LogdashWorld) {
    world.data = Some(fixtures::sample_data().expect("sample data is valid"));
}

#[given("the charting library is available")]
fn capability_available(world: &mut LogdashWorld) {
    world.capability = Some(Arc::new(RecordingCapability::default()));
}

#[given("the charting library is unavailable")]
fn capability_unavailable(world: &mut LogdashWorld) {
    world.capability = None;
}

#[given(expr = "the document declares the surface {string}")]
fn document_declares_surface(world: &mut LogdashWorld, id: String) {
    world.surfaces.push(id);
}

#[when("the dashboard is rendered")]
fn render_once(world: &mut LogdashWorld) {
    render_times(world, 1);
}

#[when(expr = "the dashboard is rendered {int} times")]
fn render_times(world: &mut LogdashWorld, times: usize) {
    let data = world.data.clone().expect("data not set");
    let surfaces = SurfaceSet::new(world.surfaces.iter().map(String::as_str));
    let capability = world.capability.clone();

    for _ in 0..times {
        let report = render_dashboard(
            capability.as_deref().map(|c| c as &dyn ChartingCapability),
            &surfaces,
            &SurfacesConfig::default(),
            &data,
            &Theme::default(),
        );
        world.reports.push(report);
    }
}

#[then(expr = "{int} chart(s) should be created")]
fn charts_created(world: &mut LogdashWorld, expected: usize) {
    let created = world
        .capability
        .as_ref()
        .map(|c| c.created().len())
        .unwrap_or(0);
    assert_eq!(created, expected);
}

#[then("no chart should be created")]
fn no_chart_created(world: &mut LogdashWorld) {
    charts_created(world, 0);
    for report in &world.reports {
        assert!(report.charts.is_empty(), "report has charts: {:?}", report);
    }
}

#[then(expr = "the rendered chart types should be {string}")]
fn rendered_types(world: &mut LogdashWorld, expected: String) {
    let expected: Vec<ChartKind> = expected
        .split(',')
        .map(|s| parse_kind(s.trim()))
        .collect();
    let report = world.reports.last().expect("nothing rendered");
    assert_eq!(report.rendered_kinds(), expected);
}

#[then(expr = "the line chart should have {int} datasets of {int} values each")]
fn line_chart_shape(world: &mut LogdashWorld, datasets: usize, values: usize) {
    let report = world.reports.last().expect("nothing rendered");
    let line = report.chart_for(ChartKind::Line).expect("no line chart");
    assert_eq!(line.config.data.datasets.len(), datasets);
    assert_eq!(line.config.data.labels.len(), values);
    for dataset in &line.config.data.datasets {
        assert_eq!(dataset.data.len(), values, "dataset {}", dataset.label);
    }
}

#[then(expr = "the line dataset {string} should be drawn {string}")]
fn line_dataset_stroke(world: &mut LogdashWorld, label: String, stroke: String) {
    let report = world.reports.last().expect("nothing rendered");
    let line = report.chart_for(ChartKind::Line).expect("no line chart");
    let dataset = line
        .config
        .data
        .datasets
        .iter()
        .find(|d| d.label == label)
        .unwrap_or_else(|| panic!("no dataset {}", label));
    match stroke.as_str() {
        "solid" => assert!(dataset.border_dash.is_empty()),
        "dashed" => assert!(!dataset.border_dash.is_empty()),
        other => panic!("Unknown stroke: {}", other),
    }
}

#[then(expr = "the bar chart should have a single dataset of {int} values")]
fn bar_chart_shape(world: &mut LogdashWorld, values: usize) {
    let report = world.reports.last().expect("nothing rendered");
    let bar = report.chart_for(ChartKind::Bar).expect("no bar chart");
    assert_eq!(bar.config.data.datasets.len(), 1);
    assert_eq!(bar.config.data.datasets[0].data.len(), values);
    assert_eq!(bar.config.data.labels.len(), values);
}

#[then(expr = "the bar label {string} should align with the value {int}")]
fn bar_label_aligns(world: &mut LogdashWorld, label: String, value: u64) {
    let report = world.reports.last().expect("nothing rendered");
    let bar = report.chart_for(ChartKind::Bar).expect("no bar chart");
    let index = bar
        .config
        .data
        .labels
        .iter()
        .position(|l| *l == label)
        .unwrap_or_else(|| panic!("no bar label {}", label));
    assert_eq!(bar.config.data.datasets[0].data[index], value);
}

#[then(expr = "the {word} chart should be skipped because {string}")]
fn chart_skipped(world: &mut LogdashWorld, kind: String, reason: String) {
    let kind = parse_kind(&kind);
    let reason = parse_reason(&reason);
    let report = world.reports.last().expect("nothing rendered");
    assert!(
        report
            .skipped
            .iter()
            .any(|s| s.kind == kind && s.reason == reason),
        "expected {:?} skipped with {:?}, got {:?}",
        kind,
        reason,
        report.skipped
    );
}

#[then(expr = "every render should report {int} charts")]
fn every_render_reports(world: &mut LogdashWorld, expected: usize) {
    assert!(!world.reports.is_empty());
    for report in &world.reports {
        assert_eq!(report.charts.len(), expected);
    }
}

#[then("every chart instance should be distinct")]
fn instances_distinct(world: &mut LogdashWorld) {
    let ids: Vec<u64> = world
        .reports
        .iter()
        .flat_map(|r| r.charts.iter().map(|c| c.instance.id))
        .collect();
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len(), "duplicate chart ids: {:?}", ids);
}
