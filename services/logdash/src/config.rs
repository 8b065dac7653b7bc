//! Configuration types for the log dashboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub surfaces: SurfacesConfig,
    #[serde(default)]
    pub charting: ChartingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            server: ServerConfig::default(),
            surfaces: SurfacesConfig::default(),
            charting: ChartingConfig::default(),
            data: DataConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Check invariants serde defaults cannot express
    pub fn validate(&self) -> crate::Result<()> {
        if self.surfaces.timeline == self.surfaces.hosts {
            return Err(crate::LogdashError::Config(format!(
                "timeline and hosts charts share surface '{}'",
                self.surfaces.timeline
            )));
        }
        Ok(())
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Element ids of the two chart surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfacesConfig {
    #[serde(default = "default_timeline_surface")]
    pub timeline: String,
    #[serde(default = "default_hosts_surface")]
    pub hosts: String,
}

impl Default for SurfacesConfig {
    fn default() -> Self {
        Self {
            timeline: default_timeline_surface(),
            hosts: default_hosts_surface(),
        }
    }
}

/// Charting library availability and location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_script_url")]
    pub script_url: String,
}

impl Default for ChartingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_url: default_script_url(),
        }
    }
}

/// Where dashboard data comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file holding timeline and hosts; built-in samples when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Re-sort hosts by descending count instead of trusting the source order
    #[serde(default)]
    pub sort_hosts: bool,
}

fn default_title() -> String {
    "Log Analyzer".to_string()
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeline_surface() -> String {
    "errorsChart".to_string()
}

fn default_hosts_surface() -> String {
    "hostsChart".to_string()
}

fn default_true() -> bool {
    true
}

fn default_script_url() -> String {
    "https://cdn.jsdelivr.net/npm/chart.js".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::LogdashError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
