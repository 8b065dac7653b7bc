//! Colour palette and per-series stroke styles

use serde::{Deserialize, Serialize};

use crate::model::{ERROR_SERIES, WARNING_SERIES};

/// Stroke style for one line series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: String,
    pub fill: String,
    /// Dash pattern in pixels; empty for a solid line
    #[serde(default)]
    pub dash: Vec<u32>,
}

impl SeriesStyle {
    fn new(color: &str, fill: &str, dash: &[u32]) -> Self {
        Self {
            color: color.to_string(),
            fill: fill.to_string(),
            dash: dash.to_vec(),
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// Muted gray-on-dark palette shared by both charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub tick_color: String,
    pub legend_color: String,
    pub grid_color: String,
    pub error: SeriesStyle,
    pub warning: SeriesStyle,
    /// Cycled through for series other than ERROR and WARNING
    pub extra_series: Vec<SeriesStyle>,
    pub bar_color: String,
    pub bar_border_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tick_color: "#9ca3af".to_string(),
            legend_color: "#d1d5db".to_string(),
            grid_color: "rgba(75, 85, 99, 0.3)".to_string(),
            error: SeriesStyle::new("#ef4444", "rgba(239, 68, 68, 0.1)", &[]),
            warning: SeriesStyle::new("#f59e0b", "rgba(245, 158, 11, 0.1)", &[5, 5]),
            extra_series: vec![
                SeriesStyle::new("#38bdf8", "rgba(56, 189, 248, 0.1)", &[]),
                SeriesStyle::new("#a78bfa", "rgba(167, 139, 250, 0.1)", &[2, 4]),
            ],
            bar_color: "rgba(59, 130, 246, 0.6)".to_string(),
            bar_border_color: "#3b82f6".to_string(),
        }
    }
}

impl Theme {
    /// Style for the series at `index` named `name`
    pub fn series_style(&self, name: &str, index: usize) -> SeriesStyle {
        match name {
            ERROR_SERIES => self.error.clone(),
            WARNING_SERIES => self.warning.clone(),
            _ if self.extra_series.is_empty() => self.error.clone(),
            _ => self.extra_series[index % self.extra_series.len()].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_solid_and_warning_dashed() {
        let theme = Theme::default();
        assert!(!theme.series_style("ERROR", 0).is_dashed());
        assert!(theme.series_style("WARNING", 1).is_dashed());
    }

    #[test]
    fn unknown_series_cycle_through_extras() {
        let theme = Theme::default();
        assert_eq!(theme.series_style("CRITICAL", 2), theme.extra_series[0]);
        assert_eq!(theme.series_style("NOTICE", 3), theme.extra_series[1]);
    }

    #[test]
    fn unknown_series_without_extras_fall_back_to_error() {
        let theme = Theme {
            extra_series: vec![],
            ..Theme::default()
        };
        assert_eq!(theme.series_style("CRITICAL", 0), theme.error);
    }

    #[test]
    fn partial_theme_uses_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"tick_color": "#ffffff"}"##).unwrap();
        assert_eq!(theme.tick_color, "#ffffff");
        assert_eq!(theme.grid_color, Theme::default().grid_color);
    }
}
