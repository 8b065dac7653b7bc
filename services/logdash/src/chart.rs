//! Chart configuration handed to the charting library
//!
//! The structs serialize to the `{ type, data: { labels, datasets }, options }`
//! object the browser charting library takes as its second constructor
//! argument.

use serde::{Deserialize, Serialize};

use crate::model::{HostAggregate, TimelineSeries};
use crate::theme::Theme;

/// Label of the single bar-chart dataset
pub const HOSTS_DATASET_LABEL: &str = "Errors";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    pub border_color: String,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub ticks: Ticks,
    pub grid: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub color: String,
}

impl ChartOptions {
    fn themed(theme: &Theme, show_legend: bool) -> Self {
        let axis = |begin_at_zero| Axis {
            ticks: Ticks {
                color: theme.tick_color.clone(),
            },
            grid: Grid {
                color: theme.grid_color.clone(),
            },
            begin_at_zero,
        };

        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: show_legend,
                    labels: LegendLabels {
                        color: theme.legend_color.clone(),
                    },
                },
            },
            scales: Scales {
                x: axis(None),
                y: axis(Some(true)),
            },
        }
    }
}

/// Line chart with one dataset per timeline series
pub fn timeline_chart(timeline: &TimelineSeries, theme: &Theme) -> ChartConfig {
    let datasets = timeline
        .series_names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let style = theme.series_style(name, index);
            Dataset {
                label: name.clone(),
                data: timeline.values_for(name).unwrap_or_default(),
                border_color: style.color,
                background_color: style.fill,
                border_dash: style.dash,
                border_width: Some(2),
                border_radius: None,
                tension: Some(0.3),
                fill: Some(false),
            }
        })
        .collect();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: timeline.labels(),
            datasets,
        },
        options: ChartOptions::themed(theme, true),
    }
}

/// Bar chart with a single dataset of per-host counts
pub fn hosts_chart(hosts: &HostAggregate, theme: &Theme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: hosts.labels(),
            datasets: vec![Dataset {
                label: HOSTS_DATASET_LABEL.to_string(),
                data: hosts.counts(),
                border_color: theme.bar_border_color.clone(),
                background_color: theme.bar_color.clone(),
                border_dash: Vec::new(),
                border_width: Some(1),
                border_radius: Some(4),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions::themed(theme, false),
    }
}
