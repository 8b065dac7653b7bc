//! BDD test world for the log dashboard

use std::sync::{Arc, Mutex};

use cucumber::World;
use logdash::capability::{ChartInstance, ChartingCapability};
use logdash::chart::ChartConfig;
use logdash::model::DashboardData;
use logdash::surface::SurfaceHandle;
use logdash::{Config, RenderReport};

/// Charting capability that records every chart it is asked to create
#[derive(Debug, Default)]
pub struct RecordingCapability {
    created: Mutex<Vec<ChartInstance>>,
}

impl RecordingCapability {
    pub fn created(&self) -> Vec<ChartInstance> {
        self.created.lock().unwrap().clone()
    }
}

impl ChartingCapability for RecordingCapability {
    fn create_chart(
        &self,
        surface: &SurfaceHandle,
        config: &ChartConfig,
    ) -> logdash::Result<ChartInstance> {
        let mut created = self.created.lock().unwrap();
        let instance = ChartInstance {
            id: created.len() as u64 + 1,
            surface: surface.id.clone(),
            kind: config.kind,
        };
        created.push(instance.clone());
        Ok(instance)
    }
}

#[derive(Debug, Default, World)]
pub struct LogdashWorld {
    // Renderer testing
    pub data: Option<DashboardData>,
    pub capability: Option<Arc<RecordingCapability>>,
    pub surfaces: Vec<String>,
    pub reports: Vec<RenderReport>,

    // Dashboard testing
    pub config: Config,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}
