//! Sources of dashboard data

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DataConfig;
use crate::error::{LogdashError, Result};
use crate::fixtures;
use crate::model::DashboardData;

/// Supplies the timeline and host counts for one render
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait DataSource: Send + Sync {
    /// Short description used in log lines
    fn describe(&self) -> String;

    /// Fetch a fresh copy of the dashboard data
    async fn fetch(&self) -> Result<DashboardData>;
}

/// Built-in sample data
#[derive(Debug, Default)]
pub struct StaticSource;

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "built-in samples".to_string()
    }

    async fn fetch(&self) -> Result<DashboardData> {
        fixtures::sample_data()
    }
}

/// Dashboard data read from a JSON file on every fetch
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        format!("file {:?}", self.path)
    }

    async fn fetch(&self) -> Result<DashboardData> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            LogdashError::InvalidData(format!("Failed to read data file {:?}: {}", self.path, e))
        })?;
        let data: DashboardData = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} time buckets and {} hosts from {:?}",
            data.timeline.buckets().len(),
            data.hosts.len(),
            self.path
        );
        Ok(data)
    }
}

/// Pick the data source named by the configuration
pub fn source_from_config(config: &DataConfig) -> Arc<dyn DataSource> {
    match &config.file {
        Some(path) => Arc::new(FileSource::new(path.clone())),
        None => Arc::new(StaticSource),
    }
}

/// Fetch from `source`, applying the configured host ordering
pub async fn load(source: &dyn DataSource, config: &DataConfig) -> Result<DashboardData> {
    let mut data = source.fetch().await?;
    if config.sort_hosts {
        data.hosts = data.hosts.sorted_desc();
    }
    Ok(data)
}
