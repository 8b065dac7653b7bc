//! Charting capability abstraction
//!
//! The renderer never talks to a charting library directly. It is handed a
//! [`ChartingCapability`], or nothing at all when the library is unavailable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartConfig, ChartKind};
use crate::error::{LogdashError, Result};
use crate::surface::SurfaceHandle;

/// A chart created by a capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInstance {
    pub id: u64,
    pub surface: String,
    pub kind: ChartKind,
}

/// Constructor side of a charting library
#[cfg_attr(test, mockall::automock)]
pub trait ChartingCapability: Send + Sync {
    /// Create a chart on `surface` from `config`
    fn create_chart(&self, surface: &SurfaceHandle, config: &ChartConfig)
        -> Result<ChartInstance>;
}

/// Emits browser script that constructs each chart with the charting
/// library's global `Chart` constructor
#[derive(Debug, Default)]
pub struct ScriptCapability {
    next_id: AtomicU64,
    statements: Mutex<Vec<String>>,
}

impl ScriptCapability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts emitted so far
    pub fn chart_count(&self) -> usize {
        self.statements.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Consume the capability, returning one statement block per chart
    pub fn into_script(self) -> Result<String> {
        let statements = self
            .statements
            .into_inner()
            .map_err(|_| LogdashError::Chart("script buffer poisoned".to_string()))?;
        Ok(statements.join("\n"))
    }
}

impl ChartingCapability for ScriptCapability {
    fn create_chart(
        &self,
        surface: &SurfaceHandle,
        config: &ChartConfig,
    ) -> Result<ChartInstance> {
        let surface_id = script_safe(&serde_json::to_string(&surface.id)?);
        let config_json = script_safe(&serde_json::to_string(config)?);
        let statement = format!(
            "  (function () {{\n    const el = document.getElementById({surface_id});\n    if (el) {{ new Chart(el, {config_json}); }}\n  }})();"
        );

        let mut statements = self
            .statements
            .lock()
            .map_err(|_| LogdashError::Chart("script buffer poisoned".to_string()))?;
        statements.push(statement);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("Emitted {} chart #{} for '{}'", config.kind, id, surface.id);

        Ok(ChartInstance {
            id,
            surface: surface.id.clone(),
            kind: config.kind,
        })
    }
}

/// Make serialized JSON inert inside an inline `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\uXXXX` forms
/// decode to the same text.
fn script_safe(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}
